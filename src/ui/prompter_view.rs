//! The prompter screen: white script text on a black background, wrapped
//! to a column sized by the font preference, optionally mirrored for a
//! glass reflection rig, scrolled by the controller offset.

use crate::app::state::AppState;
use crate::store::prefs::FONT_SIZE_MIN;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(prompter) = state.prompter.as_ref() else {
        return;
    };

    // Full-bleed black background
    frame.render_widget(Block::default().style(Theme::prompter_bg()), area);

    if area.width == 0 || area.height == 0 {
        return;
    }

    // A terminal has no font sizes, so the preference narrows the text
    // column instead: the smallest size fills the width, the largest shows
    // a fifth of it.
    let col_w = column_width(area.width, prompter.font_size);
    let col_x = area.x + (area.width - col_w) / 2;
    let col = Rect::new(col_x, area.y, col_w, area.height);

    let wrapped = wrap_text(&prompter.text, col_w as usize);
    let total = wrapped.len();
    let visible = area.height as usize;
    let offset = (prompter.controller.row_offset() as usize).min(total);

    let lines: Vec<Line> = wrapped
        .iter()
        .skip(offset)
        .take(visible)
        .map(|l| {
            let text = if prompter.mirror {
                mirror_line(l)
            } else {
                l.clone()
            };
            Line::from(Span::styled(text, Theme::prompter_text()))
        })
        .collect();

    // Mirrored text flips about the column's vertical axis, so it hangs
    // from the right edge instead of the left.
    let alignment = if prompter.mirror {
        Alignment::Right
    } else {
        Alignment::Left
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(alignment)
            .style(Theme::prompter_bg()),
        col,
    );

    if total > visible {
        let max = total - visible;
        let mut scrollbar_state = ScrollbarState::new(max).position(offset.min(max));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

fn column_width(full: u16, font_size: u16) -> u16 {
    if full <= 10 {
        return full.max(1);
    }
    let w = (full as u32 * FONT_SIZE_MIN as u32 / font_size.max(FONT_SIZE_MIN) as u32) as u16;
    w.clamp(10, full)
}

/// Word-wrap `text` to `width` display cells, preserving blank lines.
/// Words wider than the column are hard-split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0usize;
        let mut pushed_any = false;

        for word in raw_line.split_whitespace() {
            let word_w = word.width();

            if word_w > width {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                let mut piece = String::new();
                let mut piece_w = 0usize;
                for ch in word.chars() {
                    let cw = ch.width().unwrap_or(0);
                    if piece_w + cw > width && !piece.is_empty() {
                        out.push(std::mem::take(&mut piece));
                        piece_w = 0;
                        pushed_any = true;
                    }
                    piece.push(ch);
                    piece_w += cw;
                }
                current = piece;
                current_w = piece_w;
                continue;
            }

            let sep = if current.is_empty() { 0 } else { 1 };
            if current_w + sep + word_w > width {
                out.push(std::mem::take(&mut current));
                pushed_any = true;
                current.push_str(word);
                current_w = word_w;
            } else {
                if sep == 1 {
                    current.push(' ');
                    current_w += 1;
                }
                current.push_str(word);
                current_w += word_w;
            }
        }

        if !current.is_empty() || !pushed_any {
            out.push(current);
        }
    }

    out
}

/// Flip a line for glass reflection: reverse the character order.
fn mirror_line(line: &str) -> String {
    line.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        let lines = wrap_text("one\n\ntwo", 20);
        assert_eq!(lines, ["one", "", "two"]);
    }

    #[test]
    fn wrap_hard_splits_overlong_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_never_exceeds_width() {
        let text = "pneumonoultramicroscopic words and more ordinary prose here";
        for line in wrap_text(text, 12) {
            assert!(line.width() <= 12, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn mirror_reverses_characters() {
        assert_eq!(mirror_line("ABC"), "CBA");
        assert_eq!(mirror_line(""), "");
    }

    #[test]
    fn min_font_fills_the_width_and_larger_fonts_narrow_it() {
        assert_eq!(column_width(80, 20), 80);
        assert_eq!(column_width(80, 40), 40);
        assert_eq!(column_width(80, 100), 16);
        // never narrower than the floor
        assert_eq!(column_width(80, u16::MAX), 10);
    }
}
