pub mod countdown;
pub mod info;
pub mod ring;
