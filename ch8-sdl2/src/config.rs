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

//! CLI-configurable presentation knobs: scale, colors, IPS, and the
//! optional pixel grid. The logical 64x32 resolution itself is not
//! configurable.

use ch8_core::Rgba;
use clap::ArgMatches;

/// Parsed CLI configuration for a single run.
pub struct Config {
    pub rom_path: String,
    pub scale: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub ips: u32,
    pub pixel_outlines: bool,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let rom_path = matches.value_of("file").unwrap().to_string();

        let scale = matches
            .value_of("scale")
            .unwrap_or("10")
            .parse::<u32>()
            .map_err(|_| "scale must be a positive integer".to_string())?;

        let ips = matches
            .value_of("ips")
            .unwrap_or("700")
            .parse::<u32>()
            .map_err(|_| "ips must be a positive integer".to_string())?;

        let fg = matches
            .value_of("fg")
            .map(parse_rgba)
            .transpose()?
            .unwrap_or((255, 255, 255, 255));

        let bg = matches
            .value_of("bg")
            .map(parse_rgba)
            .transpose()?
            .unwrap_or((0, 0, 0, 255));

        let pixel_outlines = matches.is_present("pixel_outlines");

        Ok(Self {
            rom_path,
            scale,
            fg,
            bg,
            ips,
            pixel_outlines,
        })
    }
}

/// Parse an 8 hex digit `RRGGBBAA` string into an `Rgba` tuple.
fn parse_rgba(text: &str) -> Result<Rgba, String> {
    if text.len() != 8 {
        return Err(format!(
            "expected an 8 hex digit RRGGBBAA color, got `{}`",
            text
        ));
    }

    let byte_at = |offset: usize| {
        u8::from_str_radix(&text[offset..offset + 2], 16)
            .map_err(|_| format!("`{}` is not valid hex", text))
    };

    Ok((byte_at(0)?, byte_at(2)?, byte_at(4)?, byte_at(6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgba() {
        assert_eq!(parse_rgba("FF00FFAA").unwrap(), (0xFF, 0x00, 0xFF, 0xAA));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_rgba("FFF").is_err());
    }
}
