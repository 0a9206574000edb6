use std::fmt::{self, Display};
use std::str::FromStr;

///
/// Peak struct, one row of the shared peaks file.
///
/// Coordinates follow BED: `start` is inclusive, `end` is exclusive.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Peak {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Peak {
    ///
    /// Get the length of the peak in bases
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Half-open span used for overlap queries. A zero-length peak is
    /// widened to the single base at `start`.
    ///
    pub fn span(&self) -> (u32, u32) {
        if self.start == self.end {
            (self.start, self.start.saturating_add(1))
        } else {
            (self.start, self.end)
        }
    }

    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl FromStr for Peak {
    type Err = String;

    ///
    /// Parse a `chr\tstart\tend[\t...]` line. Extra columns are ignored.
    ///
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split('\t');

        let chr = fields
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("missing chromosome column: {:?}", line))?;

        let start = fields
            .next()
            .ok_or_else(|| format!("missing start column: {:?}", line))?;
        let start = start
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("can't parse start position {:?}: {}", start, e))?;

        let end = fields
            .next()
            .ok_or_else(|| format!("missing end column: {:?}", line))?;
        let end = end
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("can't parse end position {:?}: {}", end, e))?;

        Ok(Peak {
            chr: chr.to_string(),
            start,
            end,
        })
    }
}

impl Display for Peak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
