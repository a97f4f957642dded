use ratatui::layout::Rect;

const BAR_HEIGHT: u16 = 3;

/// Header bar, quote body and footer bar of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenRegions {
    /// Split `area` top to bottom. The header is kept before the footer when
    /// the terminal is too short for both bars.
    pub fn split(area: Rect) -> Self {
        let header_height = area.height.min(BAR_HEIGHT);
        let footer_height = area.height.saturating_sub(header_height).min(BAR_HEIGHT);
        let body_height = area.height - header_height - footer_height;

        let row = |offset: u16, height: u16| Rect {
            y: area.y + offset,
            height,
            ..area
        };
        Self {
            header: row(0, header_height),
            body: row(header_height, body_height),
            footer: row(header_height + body_height, footer_height),
        }
    }
}

/// Rect of at most `width` x `height`, centered horizontally in `area` and
/// placed `top_margin` rows below its top edge.
pub fn card_rect(width: u16, height: u16, top_margin: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let top_margin = top_margin.min(area.height);
    let height = height.min(area.height - top_margin);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + top_margin,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let regions = ScreenRegions::split(area);
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.height, 3);
        assert_eq!(regions.body.y, 3);
        assert_eq!(regions.body.height, 18);
        assert_eq!(regions.footer.y, 21);
    }

    #[test]
    fn test_regions_on_tiny_terminal() {
        let regions = ScreenRegions::split(Rect::new(0, 0, 10, 2));
        assert_eq!(regions.header.height, 2);
        assert_eq!(regions.body.height, 0);
        assert_eq!(regions.footer.height, 0);
    }

    #[test]
    fn test_regions_keep_area_offset() {
        let regions = ScreenRegions::split(Rect::new(4, 2, 30, 10));
        assert_eq!(regions.header, Rect::new(4, 2, 30, 3));
        assert_eq!(regions.body, Rect::new(4, 5, 30, 4));
        assert_eq!(regions.footer, Rect::new(4, 9, 30, 3));
    }

    #[test]
    fn test_card_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 3, 80, 10);
        let card = card_rect(60, 20, 2, area);
        assert_eq!(card, Rect::new(10, 5, 60, 8));

        let narrow = card_rect(60, 4, 1, Rect::new(0, 0, 40, 10));
        assert_eq!(narrow.width, 40);
        assert_eq!(narrow.x, 0);
    }
}
