// Utils compartidos

pub mod constants;
pub mod format;
pub mod routing;
pub mod storage;
