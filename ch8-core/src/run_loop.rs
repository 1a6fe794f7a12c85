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

//! Drives fetch/execute at a target instruction rate, independent of
//! the 60Hz timer/frame rate, against whatever [`HostSurface`] a
//! frontend provides.

use crate::cpu::Cpu;
use crate::error::Chip8Error;
use crate::host::{HostEvent, HostSurface, Rgba, RunState};

/// Presentation and pacing knobs for [`run`]. These mirror the CLI
/// surface described for frontends: logical resolution is always
/// 64x32, everything here is just how that's mapped onto a window.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Instructions executed per second while `Running`.
    pub ips: u32,

    /// Integer scale factor applied to each Chip-8 pixel.
    pub scale: u32,

    /// Foreground (lit pixel) color.
    pub fg: Rgba,

    /// Background (unlit pixel) color.
    pub bg: Rgba,

    /// Draw a grid outline around each lit pixel.
    pub outlines: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ips: 700,
            scale: 10,
            fg: (255, 255, 255, 255),
            bg: (0, 0, 0, 255),
            outlines: false,
        }
    }
}

/// Run `cpu` against `host` until the host requests quit or the CPU
/// faults. One frame, in order: drain input, execute `ips / 60`
/// instructions if running, tick timers once, present, sleep until the
/// next 60Hz boundary. `Paused` skips execution and the timer tick but
/// still drains input and re-presents the last frame.
pub fn run(
    cpu: &mut Cpu,
    host: &mut impl HostSurface,
    opts: &RunOptions,
) -> Result<(), Chip8Error> {
    let instructions_per_frame = (opts.ips / 60).max(1);
    let mut state = RunState::Running;

    loop {
        // Step 1: drain host events and fold them into keypad / state.
        for event in host.poll_events() {
            match event {
                HostEvent::KeyDown(key) => cpu.set_key_at_index(key as usize & 0xF, true),
                HostEvent::KeyUp(key) => cpu.set_key_at_index(key as usize & 0xF, false),

                HostEvent::Quit => {
                    state = RunState::Quit;
                }

                HostEvent::TogglePause => {
                    state = match state {
                        RunState::Running => RunState::Paused,
                        RunState::Paused => RunState::Running,
                        RunState::Quit => RunState::Quit,
                    };
                    log::debug!("run state toggled to {:?}", state);
                }
            }
        }

        // A Quit observed while draining input terminates the loop
        // before this frame presents; nothing from this frame's
        // (not yet started) instruction batch has run.
        if state == RunState::Quit {
            log::info!("host requested quit, stopping run loop");
            break;
        }

        // Steps 2-3: execute and tick timers, only while running.
        if state == RunState::Running {
            for _ in 0..instructions_per_frame {
                cpu.execute_cycle()?;
            }

            cpu.step_timers();
        }

        // Step 4: present the (possibly unchanged, if paused) frame.
        host.present(cpu.framebuffer(), opts.fg, opts.bg, opts.scale, opts.outlines);
        host.set_tone(cpu.st > 0);

        // Step 5: pace to the next 60Hz boundary.
        host.sleep_until_next_frame(60.0);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Rgba;
    use std::time::Duration;

    /// A host surface that records what it was asked to do and quits
    /// after a fixed number of frames.
    struct FakeHost {
        frames_remaining: u32,
        presented: Vec<Vec<bool>>,
        tones: Vec<bool>,
    }

    impl HostSurface for FakeHost {
        fn present(&mut self, framebuffer: &[bool], _fg: Rgba, _bg: Rgba, _scale: u32, _outlines: bool) {
            self.presented.push(framebuffer.to_vec());
        }

        fn poll_events(&mut self) -> Vec<HostEvent> {
            if self.frames_remaining == 0 {
                vec![HostEvent::Quit]
            } else {
                self.frames_remaining -= 1;
                Vec::new()
            }
        }

        fn now_monotonic(&self) -> Duration {
            Duration::ZERO
        }

        fn sleep_until_next_frame(&mut self, _target_hz: f64) {}

        fn set_tone(&mut self, on: bool) {
            self.tones.push(on);
        }
    }

    #[test]
    fn quits_without_presenting_extra_frames() {
        let mut cpu = Cpu::new();
        cpu.load_rom(&[0x12, 0x00]).unwrap(); // 1200: JP 0x200 (infinite loop)

        let mut host = FakeHost {
            frames_remaining: 3,
            presented: Vec::new(),
            tones: Vec::new(),
        };

        run(&mut cpu, &mut host, &RunOptions::default()).unwrap();

        // 3 frames of input draining before Quit, each one presents.
        assert_eq!(host.presented.len(), 3);
    }

    #[test]
    fn propagates_stack_faults() {
        let mut cpu = Cpu::new();
        cpu.load_rom(&[0x00, 0xEE]).unwrap(); // RET with an empty stack.

        let mut host = FakeHost {
            frames_remaining: 10,
            presented: Vec::new(),
            tones: Vec::new(),
        };

        let result = run(&mut cpu, &mut host, &RunOptions::default());
        assert!(matches!(result, Err(Chip8Error::StackUnderflow { .. })));
    }
}
