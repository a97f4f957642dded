use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::ScreenRegions;
use crate::ui::view::render_quote_view;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = ScreenRegions::split(area);
    let state = app.state();

    let header_widget = Header::new(app.endpoint(), app.quote_id());
    frame.render_widget(header_widget.widget(&state), regions.header);
    frame.render_widget(Clear, regions.body);
    render_quote_view(frame, regions.body, &state);
    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}
