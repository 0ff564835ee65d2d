pub(crate) mod definition;
pub(crate) mod sampler;
pub(crate) mod trail;
