use crate::{CameraSource, Frame, PixelFormat, Result};
use time::OffsetDateTime;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const BLOB_HALF: i64 = 20;
const DRIFT_PX_PER_FRAME: i64 = 6;

/// Synthetic camera: a blue square on a dark background that drifts toward
/// the frame center one read at a time, then holds there. Gives the blob
/// pipeline something to converge on without hardware.
pub struct MockCamera {
    counter: i64,
}

impl CameraSource for MockCamera {
    fn open(_spec: &str) -> Result<Self> {
        Ok(Self { counter: 0 })
    }

    fn read(&mut self) -> Result<Frame> {
        let start_x = (WIDTH as i64 * 7) / 8;
        let center_x = WIDTH as i64 / 2;
        let blob_x = (start_x - self.counter * DRIFT_PX_PER_FRAME).max(center_x);
        let blob_y = HEIGHT as i64 / 2;
        self.counter += 1;

        let mut data = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        for y in 0..HEIGHT as i64 {
            for x in 0..WIDTH as i64 {
                let idx = ((y * WIDTH as i64 + x) * 3) as usize;
                if (x - blob_x).abs() <= BLOB_HALF && (y - blob_y).abs() <= BLOB_HALF {
                    // Pure blue, inside the default hue band
                    data[idx + 2] = 255;
                } else {
                    // Dim gray ramp background, below the value threshold
                    let shade = ((x + y) % 24) as u8;
                    data[idx] = shade;
                    data[idx + 1] = shade;
                    data[idx + 2] = shade;
                }
            }
        }
        Ok(Frame {
            width: WIDTH,
            height: HEIGHT,
            pixel_format: PixelFormat::Rgb8,
            data,
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}
