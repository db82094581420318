#![allow(unused_imports)]

mod builders;

pub use builders::{one_of_each, RecordLine};
