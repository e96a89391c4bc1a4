//! Interactive similarity queries.
//!
//! The query loop reads one line per iteration, validates it and
//! prints either a diagnostic or the similarity of the two words on
//! the line. The loop ends on `quit` or end of input.

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::provider::EmbeddingProvider;

/// Prompt written before each line is read.
pub const PROMPT: &str = "\n> ";

/// Command that ends the loop (case-insensitive).
pub const QUIT: &str = "quit";

/// Recoverable query errors.
///
/// The `Display` implementation is the message shown to the user.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueryError {
    #[error("Please enter exactly two words separated by space")]
    BadArity,

    #[error("'{0}' does not exist in vocabulary, try again")]
    UnknownWord(String),
}

/// A parsed input line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    Quit,

    /// A pair of lower-cased words.
    Pair { word1: String, word2: String },
}

impl Query {
    /// Parse an input line.
    pub fn parse(line: &str) -> Result<Self, QueryError> {
        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT) {
            return Ok(Query::Quit);
        }

        let tokens: Vec<_> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [word1, word2] => Ok(Query::Pair {
                word1: word1.to_lowercase(),
                word2: word2.to_lowercase(),
            }),
            _ => Err(QueryError::BadArity),
        }
    }
}

/// Similarity of a word pair, formatted for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct PairSimilarity {
    pub word1: String,
    pub word2: String,
    pub similarity: f32,
}

impl fmt::Display for PairSimilarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Similarity between '{}' and '{}': {:.3}",
            self.word1, self.word2, self.similarity
        )
    }
}

/// Result of processing a single line.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The loop should end.
    Terminate,

    Similarity(PairSimilarity),

    /// The query was rejected with a user-facing diagnostic.
    Rejected(QueryError),

    /// Both words are known, but the provider could not compute
    /// their similarity.
    Failed { word1: String, word2: String },
}

/// Read-evaluate-print loop over an embedding provider.
pub struct QueryLoop<'a, P>
where
    P: ?Sized,
{
    provider: &'a P,
}

impl<'a, P> QueryLoop<'a, P>
where
    P: EmbeddingProvider + ?Sized,
{
    pub fn new(provider: &'a P) -> Self {
        QueryLoop { provider }
    }

    /// Process one input line.
    pub fn process(&self, line: &str) -> Outcome {
        let (word1, word2) = match Query::parse(line) {
            Ok(Query::Quit) => return Outcome::Terminate,
            Ok(Query::Pair { word1, word2 }) => (word1, word2),
            Err(err) => return Outcome::Rejected(err),
        };

        if !self.provider.contains(&word1) {
            return Outcome::Rejected(QueryError::UnknownWord(word1));
        }

        if !self.provider.contains(&word2) {
            return Outcome::Rejected(QueryError::UnknownWord(word2));
        }

        match self.provider.similarity(&word1, &word2) {
            Some(similarity) => Outcome::Similarity(PairSimilarity {
                word1,
                word2,
                similarity,
            }),
            None => Outcome::Failed { word1, word2 },
        }
    }

    /// Run the loop until `quit` or end of input.
    ///
    /// Only I/O errors on `input` or `output` end the loop early.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();

        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("end of input");
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);

            match self.process(&line) {
                Outcome::Terminate => {
                    tracing::debug!("quit");
                    return Ok(());
                }
                Outcome::Similarity(sim) => {
                    tracing::debug!(
                        word1 = %sim.word1,
                        word2 = %sim.word2,
                        similarity = sim.similarity,
                        "similarity"
                    );
                    writeln!(output, "{}", sim)?;
                }
                Outcome::Rejected(err) => {
                    tracing::debug!(error = ?err, "query rejected");
                    writeln!(output, "{}", err)?;
                }
                Outcome::Failed { word1, word2 } => {
                    tracing::error!(
                        word1 = %word1,
                        word2 = %word2,
                        "similarity unavailable for words in vocabulary"
                    );
                }
            }
        }
    }
}
