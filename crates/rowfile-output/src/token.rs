use uuid::Uuid;

/// Source of unique tokens for output file naming.
///
/// Implementations must make collisions across a process lifetime unlikely.
/// No ordering is promised and no two calls are required to agree.
pub trait TokenProvider {
    fn next_id(&self) -> String;
}

/// Production provider: a random 128-bit UUID rendered as text.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidProvider;

impl TokenProvider for UuidProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
