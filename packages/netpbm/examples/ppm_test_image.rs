//! Writes a gradient test image to `test_image.ppm` in the current directory, timing the work.

use netpbm::PpmImage;
use stopwatch::{Stopwatch, to_milliseconds};

const WIDTH: usize = 256;
const HEIGHT: usize = 256;

fn main() -> Result<(), netpbm::Error> {
    let mut stopwatch = Stopwatch::started();

    let image = PpmImage::test_pattern(WIDTH, HEIGHT)?;
    let generated_in = stopwatch.restart();

    image.save("test_image.ppm")?;
    let saved_in = stopwatch.elapsed();

    println!(
        "Generated {WIDTH}x{HEIGHT} test image in {}ms, saved in {}ms",
        to_milliseconds(generated_in),
        to_milliseconds(saved_in)
    );

    Ok(())
}
