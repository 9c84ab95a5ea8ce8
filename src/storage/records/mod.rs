pub mod contact;

pub(crate) use contact::ContactRecord;
