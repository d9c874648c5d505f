#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LibraryError {
    #[error("book id {0} is out of range")]
    BookIdOutOfRange(u32),
}
