use std::fs;

use lib::SampleRow;
use lib::envelope::sample_envelopes;
use lib::profile::Profile;
use lib::samples::Samples;
use plotter::render_all;
use tempfile::tempdir;

fn grid(sizes: usize, block_size: usize) -> Samples {
    (0..sizes * block_size)
        .map(|i| {
            let n = (i / block_size) as f64 * 100.0;
            let swaps = (i % block_size) as f64;
            SampleRow {
                array_size: n,
                sortedness: swaps,
                // worst case first in every block
                execution_time: n * n / (swaps + 1.0),
            }
        })
        .collect()
}

#[test]
fn nothing_to_plot_is_an_error() {
    let dir = tempdir().unwrap();
    let samples = Samples::new();
    let env = sample_envelopes(&samples, 50).unwrap();

    let err = render_all(&samples, &env, Profile::EditDistance, 50, dir.path()).unwrap_err();
    assert!(err.to_string().contains("no samples to plot"), "{err}");
    assert!(!dir.path().join("sortedness_vs_time_vs_size.png").exists());
}

#[test]
fn zero_block_size_is_rejected() {
    let dir = tempdir().unwrap();
    let samples = grid(2, 5);
    let env = sample_envelopes(&samples, 5).unwrap();

    assert!(render_all(&samples, &env, Profile::EditDistance, 0, dir.path()).is_err());
}

#[test]
fn non_finite_times_are_an_error() {
    let dir = tempdir().unwrap();
    let mut samples = grid(2, 2);
    samples.execution_times[1] = f64::INFINITY;
    let env = sample_envelopes(&samples, 2).unwrap();

    let err = render_all(&samples, &env, Profile::EditDistance, 2, dir.path()).unwrap_err();
    assert!(err.to_string().contains("non-finite"), "{err}");
    assert!(!dir.path().join("sortedness_vs_time_vs_size.png").exists());

    samples.execution_times.iter_mut().for_each(|t| *t = f64::NAN);
    assert!(render_all(&samples, &env, Profile::EditDistance, 2, dir.path()).is_err());
}

#[test]
fn writes_every_profile_image() {
    for profile in [Profile::EditDistance, Profile::Swaps] {
        let dir = tempdir().unwrap();
        let block = profile.block_size();
        let samples = grid(4, block);
        let env = sample_envelopes(&samples, block).unwrap();

        let written = render_all(&samples, &env, profile, block, dir.path()).unwrap();

        assert_eq!(written.len(), profile.images().len());
        for (path, image) in written.iter().zip(profile.images()) {
            assert_eq!(path, &dir.path().join(image.file));
            assert!(path.metadata().unwrap().len() > 0);
        }
    }
}

#[test]
fn rendering_twice_gives_identical_images() {
    let profile = Profile::Swaps;
    let block = profile.block_size();
    let samples = grid(3, block);
    let env = sample_envelopes(&samples, block).unwrap();

    let (a, b) = (tempdir().unwrap(), tempdir().unwrap());
    let first = render_all(&samples, &env, profile, block, a.path()).unwrap();
    let second = render_all(&samples, &env, profile, block, b.path()).unwrap();

    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(fs::read(x).unwrap(), fs::read(y).unwrap(), "{}", x.display());
    }
}
