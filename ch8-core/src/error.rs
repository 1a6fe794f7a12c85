/*
Copyright 2020 Anish Jewalikar

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Error kinds raised by ROM loading and instruction execution.

use thiserror::Error;

/// The fatal error conditions a `Cpu` can raise.
///
/// Unrecognized opcodes and the display's wrap/clip behavior are
/// explicitly *not* errors (see `Cpu::execute_cycle`); this enum covers
/// the cases spec'd as fatal: a ROM that can't be read, a ROM that
/// doesn't fit, and a subroutine stack that over- or underflows.
/// `RomUnreadable` is raised by the frontend (reading the ROM off disk
/// happens before a `Cpu` is involved) but shares this type so callers
/// have one error to match on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Chip8Error {
    /// The ROM file could not be read from disk.
    #[error("ROM could not be read: {0}")]
    RomUnreadable(String),

    /// The ROM is larger than the 3,584 bytes available at 0x200..0x1000.
    #[error("ROM is {len} bytes, but only 3584 bytes are available")]
    RomTooLarge { len: usize },

    /// `2NNN` was executed with the call stack already at capacity.
    /// `pc` is the address the `2NNN` was fetched from, not the
    /// (never taken) address it would have jumped to.
    #[error("stack overflow at pc={pc:#06x} executing opcode {opcode:#06x}")]
    StackOverflow { pc: u16, opcode: u16 },

    /// `00EE` was executed with an empty call stack. `pc` is the
    /// address the `00EE` was fetched from.
    #[error("stack underflow at pc={pc:#06x} executing opcode {opcode:#06x}")]
    StackUnderflow { pc: u16, opcode: u16 },
}
