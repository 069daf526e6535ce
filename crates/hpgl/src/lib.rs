use nom::{error::ErrorKind, IResult};

mod command;
mod error;
mod hpgl;
mod parsers;
mod polyline;

pub use crate::command::{commands, Command, Opcode};
pub use crate::error::ExtractError;
pub use crate::hpgl::{extract_polylines, extract_polylines_from_file};
pub use crate::polyline::{parse_coordinate_pairs, parse_multiple_segments, Polyline};
pub use shared::{Dpi, Point};

type NomError<'a> = (&'a str, ErrorKind);
type ParseResult<'a, O> = IResult<&'a str, O, NomError<'a>>;
