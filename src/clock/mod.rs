pub(crate) mod frame;
pub(crate) mod manual;
pub(crate) mod system;
