use ratatui::layout::Rect;

/// Split the frame into the header band, the body, and the footer band.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(1);
    let footer_height = 1.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the product body into the search box band and the list below it.
pub fn products_regions(body: Rect) -> (Rect, Rect) {
    let search_height = body.height.min(3);
    let search = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: search_height,
    };
    let list = Rect {
        x: body.x,
        y: body.y + search_height,
        width: body.width,
        height: body.height.saturating_sub(search_height),
    };
    (search, list)
}

/// A rect of the requested size, centered in `area` and clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_frame() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y, 23);
    }

    #[test]
    fn tiny_frames_do_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 1));
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);

        let (search, list) = products_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(search.height, 2);
        assert_eq!(list.height, 0);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 40, 40);
        assert_eq!(rect, area);

        let rect = centered_rect_by_size(area, 10, 4);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
