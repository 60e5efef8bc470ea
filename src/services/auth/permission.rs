use std::fmt;

/// Scoped capability string required by exactly one protected operation.
///
/// Each variant guards one CRUD operation on one entity type; the string form
/// is what the identity provider puts into the `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    GetMovies,
    GetActors,
    PostMovies,
    PostActors,
    EditMovies,
    EditActors,
    DeleteMovies,
    DeleteActors,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetMovies => "get:movies",
            Self::GetActors => "get:actors",
            Self::PostMovies => "post:movies",
            Self::PostActors => "post:actors",
            Self::EditMovies => "edit:movies",
            Self::EditActors => "edit:actors",
            Self::DeleteMovies => "delete:movies",
            Self::DeleteActors => "delete:actors",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
