//! Opcode tags. Each instruction starts with one of these bytes.

use core::fmt;

use crate::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instruction kinds understood by the bytecode format.
///
/// Operand-carrying instructions are not defined yet; every variant is a
/// bare tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum OpCode {
    /// Return from the current function.
    Return = 0x00,
}

impl OpCode {
    /// Every opcode, in tag order.
    pub const ALL: &'static [Self] = &[Self::Return];

    /// Tag byte written into the chunk.
    pub const fn as_byte(self) -> u8 { self as u8 }

    /// Mnemonic used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Return => "OP_RETURN",
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self { op.as_byte() }
}

impl TryFrom<u8> for OpCode {
    type Error = CoreError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(Self::Return),
            other => Err(CoreError::UnknownOpcode(other)),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn return_is_tag_zero() {
        assert_eq!(OpCode::Return.as_byte(), 0);
        assert_eq!(u8::from(OpCode::Return), 0);
        assert_eq!(OpCode::Return.to_string(), "OP_RETURN");
    }

    #[test]
    fn decodes_exactly_the_known_tags() {
        for &op in OpCode::ALL {
            assert_eq!(OpCode::try_from(op.as_byte()), Ok(op));
        }
        for byte in 0..=u8::MAX {
            let known = OpCode::ALL.iter().any(|op| op.as_byte() == byte);
            match OpCode::try_from(byte) {
                Ok(op) => assert_eq!(op.as_byte(), byte),
                Err(e) => {
                    assert!(!known);
                    assert_eq!(e, CoreError::UnknownOpcode(byte));
                }
            }
        }
    }
}
