use heyting::szs::{self, NoSuccessKind};

#[derive(Debug)]
pub struct Error(NoSuccessKind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: NoSuccessKind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &NoSuccessKind {
        &self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<NoSuccessKind> for Error {
    fn from(k: NoSuccessKind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

#[test]
fn kinds() {
    let e = Error::from(szs::GaveUp);
    assert_eq!(e.get_kind(), &szs::GaveUp);
    assert!(e.get_error().is_none());

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.p");
    let e = Error::from(io);
    assert_eq!(e.get_kind(), &szs::OsError);
    assert!(e.get_error().is_some());
}
