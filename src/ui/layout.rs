use ratatui::layout::Rect;

/// Header (tabs), error banner, body and footer, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub banner: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, banner_lines: u16) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let banner_height = banner_lines.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let banner = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: banner_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + banner_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + banner_height + footer_height),
    };
    Regions {
        header,
        banner,
        body,
        footer,
    }
}

/// Rectangle of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
