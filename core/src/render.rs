//! Pure mapping from a `FetchState` snapshot to what the view shows.

use std::fmt;

use crate::state::FetchState;
use crate::types::Movie;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "Found no movies.";

/// Exactly one of these is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List(&'a [Movie]),
}

/// Pick the view for `state`: loading first, then error, then the empty
/// message, then the list.
pub fn render(state: &FetchState) -> View<'_> {
    if state.is_loading() {
        return View::Loading;
    }
    if let Some(error) = state.error() {
        return View::Error(error);
    }
    if state.movies().is_empty() {
        return View::Empty;
    }
    View::List(state.movies())
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => f.write_str(LOADING_MESSAGE),
            View::Error(message) => f.write_str(message),
            View::Empty => f.write_str(EMPTY_MESSAGE),
            View::List(movies) => {
                for (i, movie) in movies.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "#{} {}", movie.id, movie.title)?;
                    writeln!(f, "   {}", movie.release_date)?;
                    write!(f, "   {}", movie.opening_text)?;
                }
                Ok(())
            }
        }
    }
}
