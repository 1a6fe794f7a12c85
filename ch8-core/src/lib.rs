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

//! `ch8-core` is a small, dependency-light Chip-8 interpreter backend.
//!
//! It owns the virtual machine: memory, registers, the subroutine
//! stack, both timers, the keypad bitmap and the 64x32 framebuffer,
//! together with the fetch/decode/execute pipeline and the sprite
//! blitter. It knows nothing about windowing, audio or input
//! libraries; a frontend drives it by implementing [`HostSurface`]
//! and calling [`run`].

mod cpu;
mod error;
mod font;
mod host;
mod instruction;
mod run_loop;

pub use cpu::{Cpu, HEIGHT, WIDTH};
pub use error::Chip8Error;
pub use host::{HostEvent, HostSurface, Rgba, RunState};
pub use instruction::Instruction;
pub use run_loop::{run, RunOptions};
