use strum_macros::Display;

/// The two-character mnemonic classes we care to tell apart. Everything
/// that is not a pen-down command is dropped by extraction, so only
/// `PenDown` affects output; the rest exist for inspection and tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Opcode {
    PenDown,
    PenUp,
    SelectPen,
    Initialize,
    Other,
}

impl Opcode {
    fn from_mnemonic(mnemonic: &str) -> Opcode {
        match mnemonic {
            "PD" => Opcode::PenDown,
            "PU" => Opcode::PenUp,
            "SP" => Opcode::SelectPen,
            "IN" => Opcode::Initialize,
            _ => Opcode::Other,
        }
    }
}

/// One `;`-delimited segment of an HPGL line: the mnemonic class plus the
/// raw payload that follows the two mnemonic characters.
#[derive(Debug, PartialEq)]
pub struct Command<'a> {
    opcode: Opcode,
    payload: &'a str,
}

impl<'a> Command<'a> {
    /// Segments shorter than two characters (e.g. the empty segment after
    /// a trailing `;`) are not commands and yield `None`.
    pub fn from_raw(raw: &'a str) -> Option<Command<'a>> {
        let mnemonic = raw.get(..2)?;
        Some(Command {
            opcode: Opcode::from_mnemonic(mnemonic),
            payload: &raw[2..],
        })
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn payload(&self) -> &'a str {
        self.payload
    }

    pub fn is_pen_down(&self) -> bool {
        self.opcode == Opcode::PenDown
    }
}

/// Splits one line of HPGL into its `;`-delimited commands.
pub fn commands(line: &str) -> impl Iterator<Item = Command<'_>> {
    line.split(';').filter_map(Command::from_raw)
}
