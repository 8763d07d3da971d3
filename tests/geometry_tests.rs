//! Integration tests for bar geometry.


use audiowave::{bar_heights, generate, resolve_exact, BarKind, BarRect, WaveConfig};
use wave_fixtures::{approx_eq, bars_for, config_grid, fixed_config, test_config, wave_heights};

// ==================== Counts ====================

#[test]
fn test_bar_count_matches_waves_times_bars() {
    for config in config_grid() {
        let bars = bars_for(&config, 640.0, 120.0);
        assert_eq!(bars.len() as u32, config.num_of_wave * config.num_of_bar);
    }
}

#[test]
fn test_empty_config_generates_no_bars() {
    for (waves, bars) in [(0, 5), (2, 0), (0, 0)] {
        let config = fixed_config(waves, bars, 0.0, 100.0);
        assert!(bars_for(&config, 640.0, 120.0).is_empty());
    }
}

// ==================== Height profile ====================

#[test]
fn test_heights_are_symmetric() {
    for config in config_grid() {
        let bars = bars_for(&config, 640.0, 120.0);
        let n = config.num_of_bar as usize;
        for wave in 0..config.num_of_wave {
            let heights = wave_heights(&bars, wave);
            for i in 0..n {
                assert!(
                    approx_eq(heights[i], heights[n - 1 - i]),
                    "asymmetric heights {:?} for {} bars",
                    heights,
                    n
                );
            }
        }
    }
}

#[test]
fn test_heights_rise_toward_center() {
    for config in config_grid() {
        let layout = resolve_exact(&config, 640.0, 120.0);
        let heights = bar_heights(&layout);
        let half = heights.len().div_ceil(2);
        for pair in heights[..half].windows(2) {
            assert!(pair[0] <= pair[1], "heights {:?} not rising", heights);
        }
    }
}

#[test]
fn test_center_bar_count_by_parity() {
    for config in config_grid() {
        let bars = bars_for(&config, 640.0, 120.0);
        let first_wave: Vec<_> = bars.iter().filter(|bar| bar.wave == 0).collect();
        let at_max: Vec<u32> = first_wave
            .iter()
            .filter(|bar| approx_eq(bar.height(), config.max_bar_height))
            .map(|bar| bar.index)
            .collect();
        let centers: Vec<u32> = first_wave
            .iter()
            .filter(|bar| bar.is_center())
            .map(|bar| bar.index)
            .collect();

        let n = config.num_of_bar;
        if n % 2 == 1 {
            assert_eq!(at_max, vec![n / 2], "odd count {}", n);
        } else {
            assert_eq!(at_max, vec![n / 2 - 1, n / 2], "even count {}", n);
        }
        assert_eq!(at_max, centers);
    }
}

#[test]
fn test_five_bar_reference_heights() {
    let config = test_config();
    let layout = resolve_exact(&config, 90.0, 100.0);
    assert_eq!(layout.height_step, 50.0);
    assert_eq!(bar_heights(&layout), vec![0.0, 50.0, 100.0, 50.0, 0.0]);
    assert_eq!(
        wave_heights(&bars_for(&config, 90.0, 100.0), 0),
        vec![0.0, 50.0, 100.0, 50.0, 0.0]
    );
}

#[test]
fn test_four_bar_reference_heights() {
    let config = fixed_config(1, 4, 12.0, 72.0);
    let layout = resolve_exact(&config, 70.0, 72.0);
    assert_eq!(layout.height_step, 30.0);

    let bars: Vec<_> = generate(&config, &layout, 70.0, 72.0).collect();
    let kinds: Vec<BarKind> = bars.iter().map(|bar| bar.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BarKind::Leading,
            BarKind::Center,
            BarKind::Center,
            BarKind::Trailing
        ]
    );
    assert_eq!(wave_heights(&bars, 0), vec![12.0, 72.0, 72.0, 12.0]);
}

// ==================== Placement ====================

#[test]
fn test_two_single_bar_waves_centered_as_group() {
    let config = fixed_config(2, 1, 0.0, 50.0);
    let layout = resolve_exact(&config, 30.0, 50.0);
    // Two bars and one gap: 3 slots of 10 px, capped below max width 20.
    assert_eq!(layout.bar_width, 10.0);

    let bars: Vec<_> = generate(&config, &layout, 100.0, 50.0).collect();
    assert_eq!(bars.len(), 2);
    assert!(bars.iter().all(|bar| bar.is_center()));
    assert!(bars.iter().all(|bar| bar.height() == 50.0));
    assert_eq!((bars[0].wave, bars[1].wave), (0, 1));

    // Separated by exactly one spacing unit.
    assert_eq!(bars[1].rect.left - bars[0].rect.right, layout.spacing);
    // Group of width 30 centered in 100.
    assert_eq!(bars[0].rect.left, 35.0);
    assert_eq!(bars[1].rect.right, 65.0);
}

#[test]
fn test_waves_are_horizontally_centered() {
    for config in config_grid() {
        let bars = bars_for(&config, 1000.0, 120.0);
        let left = bars.iter().map(|b| b.rect.left).fold(f32::INFINITY, f32::min);
        let right = bars.iter().map(|b| b.rect.right).fold(f32::NEG_INFINITY, f32::max);
        assert!(
            approx_eq(left, 1000.0 - right),
            "margins {} and {} differ",
            left,
            1000.0 - right
        );
    }
}

#[test]
fn test_bars_do_not_overlap() {
    for config in config_grid() {
        let bars = bars_for(&config, 480.0, 120.0);
        for pair in bars.windows(2) {
            assert!(pair[0].rect.right <= pair[1].rect.left + 1e-3);
        }
    }
}

#[test]
fn test_bars_share_a_centerline() {
    for config in config_grid() {
        let bars = bars_for(&config, 640.0, 200.0);
        for bar in &bars {
            assert!(
                approx_eq(bar.rect.center_y(), 100.0),
                "bar {:?} off center for {} bars",
                bar.rect,
                config.num_of_bar
            );
        }
    }
}

#[test]
fn test_centerline_reference_rectangles() {
    // 7 bars, 90 px tall at the peak, 10 px at the edges, on a 130x150 surface.
    let config = fixed_config(1, 7, 10.0, 90.0);
    let layout = resolve_exact(&config, 130.0, 150.0);
    assert_eq!(layout.bar_width, 10.0);

    let rects: Vec<BarRect> = generate(&config, &layout, 130.0, 150.0)
        .map(|bar| bar.rect)
        .collect();

    let step = 80.0 / 3.0;
    let offset_top = 30.0;
    for (i, rect) in rects.iter().enumerate() {
        assert!(approx_eq(rect.left, i as f32 * 20.0));
        assert!(approx_eq(rect.right, i as f32 * 20.0 + 10.0));
        if i == 3 {
            assert_eq!(rect.top, offset_top);
            assert_eq!(rect.bottom, offset_top + 90.0);
        } else {
            let d = (if i < 3 { i } else { 6 - i }) as f32;
            let top = step / 2.0 * 3.0 - d * step / 2.0 + offset_top;
            assert!(approx_eq(rect.top, top), "bar {} top {} != {}", i, rect.top, top);
            assert!(approx_eq(rect.bottom, top + 10.0 + d * step));
        }
    }
}

#[test]
fn test_background_aware_is_uniform() {
    let config = WaveConfig {
        bar_use_background_aware: true,
        ..fixed_config(3, 6, 0.0, 40.0)
    };
    let bars = bars_for(&config, 500.0, 40.0);
    assert!(bars.iter().all(|bar| bar.background_aware));

    let bars = bars_for(&fixed_config(3, 6, 0.0, 40.0), 500.0, 40.0);
    assert!(bars.iter().all(|bar| !bar.background_aware));
}

// ==================== Determinism ====================

#[test]
fn test_generation_is_bit_identical() {
    for config in config_grid() {
        let layout = resolve_exact(&config, 777.0, 99.0);
        let first: Vec<BarRect> = generate(&config, &layout, 777.0, 99.0)
            .map(|bar| bar.rect)
            .collect();
        let second: Vec<BarRect> = generate(&config, &layout, 777.0, 99.0)
            .map(|bar| bar.rect)
            .collect();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.left.to_bits(), b.left.to_bits());
            assert_eq!(a.top.to_bits(), b.top.to_bits());
            assert_eq!(a.right.to_bits(), b.right.to_bits());
            assert_eq!(a.bottom.to_bits(), b.bottom.to_bits());
        }
    }
}

#[test]
fn test_cloned_sequence_restarts() {
    let config = fixed_config(2, 5, 0.0, 40.0);
    let layout = resolve_exact(&config, 300.0, 40.0);
    let bars = generate(&config, &layout, 300.0, 40.0);
    let replay = bars.clone();
    assert_eq!(bars.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
}
