#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

use std::fmt;

use serde::Serialize;

/// Compiler identity declared by the build configuration.
///
/// Selection happens once, before the program starts: the build bakes a
/// single token into the binary and exactly one variant results from it.
/// Anything the build does not recognize collapses to `Unknown` -- that is
/// a normal outcome, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompilerId {
    Intel,
    Gnu,
    Pgi,
    Xl,
    AppleClang,
    Unknown,
}

impl CompilerId {
    /// All recognized identities, in greeting order. `Unknown` is the
    /// fallback, not a recognized identity, so it is not listed here.
    pub const RECOGNIZED: [CompilerId; 5] = [
        CompilerId::Intel,
        CompilerId::Gnu,
        CompilerId::Pgi,
        CompilerId::Xl,
        CompilerId::AppleClang,
    ];

    /// Map a build-configuration token to its identity.
    ///
    /// Total: unrecognized tokens (including the empty string) yield
    /// `Unknown`. Matching is case-insensitive because the token arrives as
    /// free text from the build environment.
    pub fn from_token(token: &str) -> CompilerId {
        match token.to_ascii_lowercase().as_str() {
            "intel" => CompilerId::Intel,
            "gnu" => CompilerId::Gnu,
            "pgi" => CompilerId::Pgi,
            "xl" => CompilerId::Xl,
            "appleclang" => CompilerId::AppleClang,
            _ => CompilerId::Unknown,
        }
    }

    /// The greeting line for this identity. Always a valid string.
    pub fn greeting(self) -> &'static str {
        match self {
            CompilerId::Intel => "Hello Intel compiler!",
            CompilerId::Gnu => "Hello GNU compiler!",
            CompilerId::Pgi => "Hello PGI compiler!",
            CompilerId::Xl => "Hello XL compiler!",
            CompilerId::AppleClang => "Hello AppleClang compiler!",
            CompilerId::Unknown => "Hello unknown compiler - have we met before?",
        }
    }

    /// Canonical spelling of the identity token.
    pub fn as_str(self) -> &'static str {
        match self {
            CompilerId::Intel => "Intel",
            CompilerId::Gnu => "GNU",
            CompilerId::Pgi => "PGI",
            CompilerId::Xl => "XL",
            CompilerId::AppleClang => "AppleClang",
            CompilerId::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full program output: the greeting line, then the compiler-name line.
/// `name` is the externally supplied token and is passed through unmodified.
pub fn banner(id: CompilerId, name: &str) -> String {
    format!("{}\ncompiler name is {}", id.greeting(), name)
}
