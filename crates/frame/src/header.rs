//! `HeaderDescriptor`: the caller-provided, immutable description of a
//! SAME header.

use same_core::constants::{
    ATTN_DURATION_MAX, ATTN_DURATION_MIN, CALLSIGN_LEN, EVENT_CODE_LEN, LOCATION_CODE_LEN,
    LOCATION_CODES_MAX, ORIGINATOR_CODE_LEN, ORIGINATOR_TIME_LEN, VALID_TIME_LEN,
};

use crate::{FrameError, Result};

/// A single six-digit PSSCCC location code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationCode([u8; LOCATION_CODE_LEN]);

impl LocationCode {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != LOCATION_CODE_LEN {
            return Err(FrameError::FieldLength {
                field: "location code",
                expected: LOCATION_CODE_LEN,
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; LOCATION_CODE_LEN];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    pub fn as_bytes(&self) -> &[u8; LOCATION_CODE_LEN] {
        &self.0
    }
}

/// A fixed-capacity, explicitly-length-tracked list of location codes.
///
/// The upstream C implementation terminates its location list with an
/// in-memory sentinel value ("SPOOKY") — fragile, since any real location
/// code equal to that literal would truncate the list. This type tracks
/// its length explicitly instead, per the distilled spec's design note;
/// there is no behavioral difference on any valid input.
#[derive(Debug, Clone, Copy)]
pub struct LocationList {
    codes: [LocationCode; LOCATION_CODES_MAX],
    len: usize,
}

impl LocationList {
    pub fn new() -> Self {
        Self {
            codes: [LocationCode([0u8; LOCATION_CODE_LEN]); LOCATION_CODES_MAX],
            len: 0,
        }
    }

    pub fn push(&mut self, code: LocationCode) -> Result<()> {
        if self.len >= LOCATION_CODES_MAX {
            return Err(FrameError::TooManyLocations {
                count: self.len + 1,
                max: LOCATION_CODES_MAX,
            });
        }
        self.codes[self.len] = code;
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[LocationCode] {
        &self.codes[..self.len]
    }
}

impl Default for LocationList {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-provided, immutable description of a SAME header.
///
/// Every field is a fixed-size byte array holding exactly its declared
/// length; the serializer performs no validation of character classes,
/// only of length (enforced here, at construction).
#[derive(Debug, Clone, Copy)]
pub struct HeaderDescriptor {
    pub originator: [u8; ORIGINATOR_CODE_LEN],
    pub event: [u8; EVENT_CODE_LEN],
    pub locations: LocationList,
    pub valid_time: [u8; VALID_TIME_LEN],
    pub originator_time: [u8; ORIGINATOR_TIME_LEN],
    pub callsign: [u8; CALLSIGN_LEN],
    pub attn_sig_duration: u32,
}

impl HeaderDescriptor {
    /// Constructs a descriptor from field slices, validating every fixed
    /// length and the attention-signal duration bound.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        originator: &[u8],
        event: &[u8],
        locations: &[LocationCode],
        valid_time: &[u8],
        originator_time: &[u8],
        callsign: &[u8],
        attn_sig_duration: u32,
    ) -> Result<Self> {
        let originator = fixed_field("originator code", originator, ORIGINATOR_CODE_LEN)?;
        let event = fixed_field("event code", event, EVENT_CODE_LEN)?;
        let valid_time = fixed_field("valid time period", valid_time, VALID_TIME_LEN)?;
        let originator_time = fixed_field("originator time", originator_time, ORIGINATOR_TIME_LEN)?;
        let callsign = fixed_field("callsign", callsign, CALLSIGN_LEN)?;

        if !(ATTN_DURATION_MIN..=ATTN_DURATION_MAX).contains(&attn_sig_duration) {
            return Err(FrameError::AttnDurationOutOfRange {
                duration: attn_sig_duration,
                min: ATTN_DURATION_MIN,
                max: ATTN_DURATION_MAX,
            });
        }

        let mut location_list = LocationList::new();
        for code in locations {
            location_list.push(*code)?;
        }

        Ok(Self {
            originator,
            event,
            locations: location_list,
            valid_time,
            originator_time,
            callsign,
            attn_sig_duration,
        })
    }
}

fn fixed_field<const N: usize>(name: &'static str, bytes: &[u8], expected: usize) -> Result<[u8; N]> {
    if bytes.len() != expected {
        return Err(FrameError::FieldLength {
            field: name,
            expected,
            actual: bytes.len(),
        });
    }
    let mut buf = [0u8; N];
    buf.copy_from_slice(bytes);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> LocationCode {
        LocationCode::new(s.as_bytes()).unwrap()
    }

    #[test]
    fn construction_accepts_valid_fields() {
        let desc = HeaderDescriptor::new(
            b"WXR",
            b"TOR",
            &[loc("048484"), loc("048024")],
            b"1000",
            b"1172221",
            b"WAEB/AM ",
            8,
        )
        .unwrap();
        assert_eq!(desc.locations.len(), 2);
    }

    #[test]
    fn rejects_bad_field_length() {
        let result = HeaderDescriptor::new(
            b"WX", // too short
            b"TOR",
            &[loc("048484")],
            b"1000",
            b"1172221",
            b"WAEB/AM ",
            8,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duration_out_of_range() {
        let result = HeaderDescriptor::new(
            b"WXR",
            b"TOR",
            &[loc("048484")],
            b"1000",
            b"1172221",
            b"WAEB/AM ",
            30,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_too_many_locations() {
        let codes: Vec<LocationCode> = (0..32).map(|_| loc("048484")).collect();
        let result = HeaderDescriptor::new(b"WXR", b"TOR", &codes, b"1000", b"1172221", b"WAEB/AM ", 8);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_maximum_locations() {
        let codes: Vec<LocationCode> = (0..31).map(|_| loc("048484")).collect();
        let desc =
            HeaderDescriptor::new(b"WXR", b"TOR", &codes, b"1000", b"1172221", b"WAEB/AM ", 8).unwrap();
        assert_eq!(desc.locations.len(), 31);
    }
}
