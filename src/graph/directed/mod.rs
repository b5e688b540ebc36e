mod connections;
pub(crate) use self::connections::*;
