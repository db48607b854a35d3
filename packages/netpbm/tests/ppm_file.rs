//! Writes images to real files and reads them back.

use std::fs;

use netpbm::{Error, PpmImage, Rgb};

#[test]
fn save_writes_plain_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_pixels.ppm");

    let image = PpmImage::new(
        1,
        2,
        vec![Rgb::new(0.0, 0.5, 1.0), Rgb::new(2.0, -1.0, 0.25)],
    )
    .unwrap();

    image.save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "P3\n1 2\n255\n0 128 255\n255 0 64\n");
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("replaced.ppm");
    fs::write(&path, "this is not an image and is much longer than the one we write").unwrap();

    PpmImage::new(1, 1, vec![Rgb::default()])
        .unwrap()
        .save(&path)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "P3\n1 1\n255\n0 0 0\n");
}

#[test]
fn test_pattern_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.ppm");

    PpmImage::test_pattern(4, 3).unwrap().save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[..3], ["P3", "4 3", "255"]);
    assert_eq!(lines.len(), 3 + 4 * 3);

    // Top left is green, bottom right is red, both with the constant blue.
    assert_eq!(lines[3], "0 255 64");
    assert_eq!(lines[lines.len() - 1], "255 0 64");

    for pixel in &lines[3..] {
        let channels: Vec<u16> = pixel
            .split(' ')
            .map(|c| c.parse().unwrap())
            .collect();

        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("image.ppm");

    let result = PpmImage::test_pattern(2, 2).unwrap().save(&path);

    assert!(matches!(result, Err(Error::Io(_))));
}
