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

//! The SDL2 [`HostSurface`] implementation: a window/canvas, the
//! square-wave audio device, and the event pump, wired together.

use std::thread::sleep;
use std::time::{Duration, Instant};

use ch8_core::{HostEvent, HostSurface, Rgba};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::audio::Audio;
use crate::input::keycode_to_chip8;

const LOGICAL_WIDTH: u32 = 64;
const LOGICAL_HEIGHT: u32 = 32;

pub struct SdlSurface {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    audio: Audio,
    start: Instant,
    next_frame: Duration,
}

impl SdlSurface {
    pub fn new(sdl_context: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let video = sdl_context.video()?;

        let window = video
            .window(
                "Chip-8",
                LOGICAL_WIDTH * scale,
                LOGICAL_HEIGHT * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        canvas.present();

        let event_pump = sdl_context.event_pump()?;
        let audio = Audio::new(sdl_context)?;

        Ok(Self {
            canvas,
            event_pump,
            audio,
            start: Instant::now(),
            next_frame: Duration::from_secs(0),
        })
    }
}

impl HostSurface for SdlSurface {
    fn present(&mut self, framebuffer: &[bool], fg: Rgba, bg: Rgba, scale: u32, outlines: bool) {
        let (fr, fg_, fb, fa) = fg;
        let (br, bg_, bb, ba) = bg;

        self.canvas.set_draw_color(Color::RGBA(br, bg_, bb, ba));
        self.canvas.clear();
        self.canvas.set_draw_color(Color::RGBA(fr, fg_, fb, fa));

        for row in 0..LOGICAL_HEIGHT as usize {
            let offset = row * LOGICAL_WIDTH as usize;

            for col in 0..LOGICAL_WIDTH as usize {
                if !framebuffer[offset + col] {
                    continue;
                }

                let x = col as i32 * scale as i32;
                let y = row as i32 * scale as i32;
                let rect = Rect::new(x, y, scale, scale);

                let _ = self.canvas.fill_rect(rect);

                if outlines {
                    self.canvas.set_draw_color(Color::RGBA(br, bg_, bb, ba));
                    let _ = self.canvas.draw_rect(rect);
                    self.canvas.set_draw_color(Color::RGBA(fr, fg_, fb, fa));
                }
            }
        }

        self.canvas.present();
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(HostEvent::Quit),

                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(HostEvent::Quit),

                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => events.push(HostEvent::TogglePause),

                // KeyDown and KeyUp are handled as independent arms, not
                // merged with a shared `is_down` flag: the source this
                // was translated from used one handler with a boolean
                // falling through both cases, which left stray keys
                // stuck down if the matching release event was missed.
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keycode_to_chip8(key) {
                        events.push(HostEvent::KeyDown(index));
                    }
                }

                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keycode_to_chip8(key) {
                        events.push(HostEvent::KeyUp(index));
                    }
                }

                _ => {}
            }
        }

        events
    }

    fn now_monotonic(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep_until_next_frame(&mut self, target_hz: f64) {
        let frame_len = Duration::from_secs_f64(1.0 / target_hz);
        self.next_frame += frame_len;

        let now = self.start.elapsed();
        if let Some(remaining) = self.next_frame.checked_sub(now) {
            sleep(remaining);
        } else {
            // We're behind schedule; don't try to catch up by skipping
            // sleeps entirely, just resync to now.
            self.next_frame = now;
        }
    }

    fn set_tone(&mut self, on: bool) {
        self.audio.set_tone(on);
    }
}
