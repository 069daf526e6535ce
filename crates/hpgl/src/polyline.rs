use std::ops::Deref;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shared::{Dpi, Point};

use crate::error::ExtractError;
use crate::parsers::integer_token;

/// One continuous pen-down stroke, in inches. May be empty: a bare `PD`
/// command still contributes a polyline to the output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Polyline {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Polyline(points)
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses an `"x1,y1,x2,y2,..."` payload into a polyline, converting raw
/// step counts to inches by dividing each by `dpi`.
///
/// Only complete pairs are parsed: a trailing unpaired token is dropped
/// silently, without ever being read as a number, so even garbage in the
/// unpaired slot does not fail the call. Inkscape's exporter always emits
/// full pairs; a file that does not is truncated rather than rejected,
/// matching how these files have always been consumed.
pub fn parse_coordinate_pairs(payload: &str, dpi: Dpi) -> Result<Polyline> {
    let tokens: Vec<&str> = payload.split(',').collect();
    let points = tokens
        .chunks_exact(2)
        .map(|pair| {
            let x = step_count(pair[0], payload)?;
            let y = step_count(pair[1], payload)?;
            Ok(Point::new(x as f64 / *dpi, y as f64 / *dpi))
        })
        .collect::<Result<Vec<Point>>>()?;

    Ok(Polyline(points))
}

fn step_count(token: &str, payload: &str) -> Result<i64> {
    integer_token(token).map(|(_, raw)| raw).map_err(|_| {
        ExtractError::MalformedPayload {
            payload: payload.to_string(),
            token: token.to_string(),
        }
        .into()
    })
}

/// One polyline per payload, in payload order. The first malformed payload
/// aborts the whole batch; there is no partial output.
pub fn parse_multiple_segments<'a, I>(payloads: I, dpi: Dpi) -> Result<Vec<Polyline>>
where
    I: IntoIterator<Item = &'a str>,
{
    payloads
        .into_iter()
        .map(|payload| parse_coordinate_pairs(payload, dpi))
        .collect()
}
