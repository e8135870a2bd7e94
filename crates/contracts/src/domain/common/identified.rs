/// Record carrying a server-assigned identifier.
///
/// The identifier is opaque to the client: it is never generated or mutated
/// locally, only echoed back in update/delete requests.
pub trait Identified {
    fn id(&self) -> &str;
}
