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

//! The capability boundary between the core and whatever windowing,
//! audio and input library a frontend chooses. The core knows nothing
//! about SDL2, glium, or wasm canvases; it only knows this trait.

use std::time::Duration;

/// An 8-bit-per-channel RGBA color, as handed to `HostSurface::present`.
pub type Rgba = (u8, u8, u8, u8);

/// Events a host surface can deliver to the run loop in one
/// `poll_events` call. Keydown and keyup are independent variants on
/// purpose (see `crate::run_loop`): nothing here lets one fall through
/// into the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A key on the 16-key hexadecimal keypad (0x0..=0xF) was pressed.
    KeyDown(u8),

    /// A key on the 16-key hexadecimal keypad (0x0..=0xF) was released.
    KeyUp(u8),

    /// The host wants the run loop to stop (window close, Escape key).
    Quit,

    /// The host wants to flip between `Running` and `Paused`.
    TogglePause,
}

/// The three states the run loop can be in. Only `Running` advances PC
/// or ticks timers; `Paused` still drains input and re-presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    Quit,
}

/// The operations a host surface must provide. A frontend (SDL2, wasm
/// canvas, headless test harness) implements this once and the run
/// loop in `crate::run_loop` drives it without knowing which.
pub trait HostSurface {
    /// Present the framebuffer. `framebuffer` is row-major, 64 columns
    /// by 32 rows, `true` meaning lit.
    fn present(&mut self, framebuffer: &[bool], fg: Rgba, bg: Rgba, scale: u32, outlines: bool);

    /// Drain all pending input/window events since the last call.
    fn poll_events(&mut self) -> Vec<HostEvent>;

    /// A monotonic clock reading, used only for host-side pacing
    /// bookkeeping (not read by the run loop itself).
    fn now_monotonic(&self) -> Duration;

    /// Block until the next `target_hz` frame boundary.
    fn sleep_until_next_frame(&mut self, target_hz: f64);

    /// Start or stop the continuous tone used while the sound timer is
    /// non-zero. Frontends with no audio device may no-op this.
    fn set_tone(&mut self, _on: bool) {}
}
