// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Insets, Size};
use styled_text::{styled, Attributed, Font, StyledText};

use crate::{AutoSizeModel, AutoSizedText, TextMeasurer};

/// Wraps every character to a fixed advance and every line to a fixed height.
struct FixedMetrics {
    advance: f64,
    line_height: f64,
    calls: usize,
}

impl TextMeasurer for FixedMetrics {
    fn required_height(&mut self, text: &StyledText, width: f64) -> f64 {
        self.calls += 1;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "test widths are small, positive whole multiples of the advance"
        )]
        let per_line = ((width / self.advance) as usize).max(1);
        let lines: usize = text
            .as_str()
            .split('\n')
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum();
        let multiple = f64::from(text.paragraph_style().effective_line_height_multiple());
        lines as f64 * self.line_height * multiple
    }
}

fn metrics() -> FixedMetrics {
    FixedMetrics {
        advance: 10.0,
        line_height: 20.0,
        calls: 0,
    }
}

#[test]
fn model_starts_from_given_size() {
    let model = AutoSizeModel::new(150.0, 12.0);
    assert_eq!(model.size(), Size::new(150.0, 12.0));
}

#[test]
fn set_height_reports_changes() {
    let mut model = AutoSizeModel::new(100.0, 0.0);
    assert!(model.set_height(40.0));
    assert!(!model.set_height(40.0));
    assert_eq!(model.height, 40.0);
}

#[test]
fn layout_records_height_at_fixed_width() {
    let text = styled![
        StyledText::new("0123456789")
            .font(Font::bold_system(15.0))
            .newline(),
        StyledText::new("0123456789ABCDE"),
    ];
    let mut view = AutoSizedText::new(text, 100.0, 0.0);
    let mut measurer = metrics();

    // Ten characters fit per line: one line, then two.
    let size = view.layout(&mut measurer);
    assert_eq!(size, Size::new(100.0, 60.0));
    assert_eq!(view.ideal_size(), size);
    assert_eq!(measurer.calls, 1);
}

#[test]
fn narrower_width_grows_height() {
    let mut view = AutoSizedText::new(StyledText::new("0123456789"), 100.0, 0.0);
    let mut measurer = metrics();
    assert_eq!(view.layout(&mut measurer).height, 20.0);

    view.set_width(50.0);
    assert_eq!(view.layout(&mut measurer).height, 40.0);
    assert_eq!(view.model().width, 50.0);
}

#[test]
fn insets_shrink_width_and_pad_height() {
    let mut view = AutoSizedText::new(StyledText::new("0123456789"), 100.0, 0.0)
        .with_insets(Insets::new(5.0, 2.0, 5.0, 3.0));
    let mut widths = None;
    let size = view.layout(&mut |_: &StyledText, width: f64| {
        widths = Some(width);
        20.0
    });
    assert_eq!(widths, Some(90.0));
    assert_eq!(size.height, 25.0);
}

#[test]
fn invalid_measurement_is_recorded_as_zero() {
    let mut view = AutoSizedText::new(StyledText::new("x"), 10.0, 7.0);
    let size = view.layout(&mut |_: &StyledText, _: f64| f64::NAN);
    assert_eq!(size.height, 0.0);
}

#[test]
fn set_text_is_measured_on_next_layout() {
    let mut view = AutoSizedText::new(StyledText::new("short"), 100.0, 0.0);
    let mut measurer = metrics();
    view.layout(&mut measurer);

    let mut longer = StyledText::new("a");
    longer.newline().append(&StyledText::new("b"));
    view.set_text(longer);
    assert_eq!(view.model().height, 20.0);
    assert_eq!(view.layout(&mut measurer).height, 40.0);
    assert_eq!(view.text().as_str(), "a\nb");
}

#[test]
fn line_height_multiple_reaches_the_measurer() {
    let mut text = StyledText::new("0123456789");
    text.line_height_multiple(2.0);
    let mut view = AutoSizedText::new(text, 100.0, 0.0);
    assert_eq!(view.layout(&mut metrics()).height, 40.0);
}
