mod primitives;
pub(crate) mod string;
