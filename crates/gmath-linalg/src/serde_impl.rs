//! Serde support behind the `serde` feature.
//!
//! Const-generic arrays have no blanket serde impls, so vectors serialize as
//! fixed-length tuples and matrices as tuples of row tuples:
//!
//! ```text
//! vec3(1, 2, 3)            -> [1, 2, 3]
//! matrix2x2 (1, 0)(0, 1)   -> [[1, 0], [0, 1]]
//! ```

use crate::matrix::Matrix;
use crate::vector::Vector;
use gmath_core::Scalar;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for e in self {
            tuple.serialize_element(e)?;
        }
        tuple.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<T, N> {
            type Value = Vector<T, N>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {N} numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut v = Vector::<T, N>::zero();
                for i in 0..N {
                    v[i] = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(v)
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

impl<T: Scalar + Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in self.rows() {
            tuple.serialize_element(row)?;
        }
        tuple.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

        impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Visitor<'de>
            for MatrixVisitor<T, R, C>
        {
            type Value = Matrix<T, R, C>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {R} rows of {C} numbers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut m = Matrix::<T, R, C>::zero();
                for i in 0..R {
                    *m.row_mut(i) = seq
                        .next_element::<Vector<T, C>>()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(R, MatrixVisitor::<T, R, C>(PhantomData))
    }
}
