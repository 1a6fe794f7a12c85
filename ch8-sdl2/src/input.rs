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

//! The canonical QWERTY -> Chip-8 hex keypad mapping:
//!
//! ```text
//! 1 2 3 4   ->   1 2 3 C
//! Q W E R   ->   4 5 6 D
//! A S D F   ->   7 8 9 E
//! Z X C V   ->   A 0 B F
//! ```
//!
//! Unlike the C source this was translated from, `E` maps to hex `6`
//! and `R` to hex `D`; the original swapped `SDLK_t` in for `SDLK_e`
//! (mapping `T` to `0xD` and leaving `E` unused), which was a typo,
//! not a feature, so it is not reproduced here.

use sdl2::keyboard::Keycode;

pub fn keycode_to_chip8(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),

        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),

        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),

        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r_maps_to_hex_d_not_6() {
        assert_eq!(keycode_to_chip8(Keycode::R), Some(0xD));
        assert_eq!(keycode_to_chip8(Keycode::E), Some(0x6));
    }

    #[test]
    fn t_is_unmapped() {
        assert_eq!(keycode_to_chip8(Keycode::T), None);
    }
}
