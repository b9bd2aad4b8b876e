use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::{NotificationCenter, Severity, wrap_words};

/// How many toasts are shown at once; older ones wait their turn.
const MAX_VISIBLE: usize = 4;

/// The toast overlay: active notifications stacked in the top right
/// corner, newest first.
pub struct ToastStack {}

impl StatefulWidget for &ToastStack {
    type State = NotificationCenter;

    fn render(self, area: Rect, buf: &mut Buffer, center: &mut Self::State) {
        let width = area.width.min(44);
        if width < 8 {
            return;
        }

        let mut y = area.y.saturating_add(1);

        for active in center.active().iter().rev().take(MAX_VISIBLE) {
            let notification = &active.notification;

            let body = wrap_words(&notification.description, width.saturating_sub(2) as usize);
            let height = (body.len().min(3) as u16) + 2;

            let rect = Rect {
                x: area.right().saturating_sub(width + 1),
                y,
                width,
                height,
            };
            if rect.bottom() > area.bottom() {
                break;
            }

            let color = match notification.severity {
                Severity::Error => Color::Red,
                Severity::Info => Color::Blue,
            };

            let mut block = Block::bordered()
                .border_style(Style::new().fg(color))
                .title(Line::from(notification.title.clone()).bold());
            if notification.dismissible {
                block = block.title_bottom(Line::raw(" d to dismiss ").right_aligned());
            }

            Clear.render(rect, buf);
            Paragraph::new(notification.description.clone())
                .wrap(Wrap { trim: true })
                .block(block)
                .render(rect, buf);

            y = y.saturating_add(height);
        }
    }
}
