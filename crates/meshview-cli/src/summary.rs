use std::path::Path;

use console::Style;
use meshview_core::cache::GenerationInfo;
use meshview_core::geometry::Rect;
use meshview_core::render::RenderOptions;
use meshview_core::viewport::ScrollState;
use meshview_core::world::World;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    on: Style,
    off: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            on: Style::new().green(),
            off: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_render_summary(
    world: &World,
    options: &RenderOptions,
    info: &GenerationInfo,
    output: &Path,
    preview: Option<&Path>,
) {
    let s = Styles::new();
    let title = format!("World Visualizer - {} [{}]", world.name, world.sno_id);

    println!();
    println!("  {}", s.title.apply_to(&title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Stage"),
        s.value.apply_to(format!("{}x{}", info.full_size.0, info.full_size.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Preview"),
        s.value.apply_to(format!("{}x{}", info.preview_size.0, info.preview_size.1))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Generation"),
        s.value.apply_to(info.id)
    );
    println!();

    println!("  {}", s.header.apply_to("Layers"));
    for (toggle, enabled) in options.toggles() {
        let state = if enabled {
            s.on.apply_to("on")
        } else {
            s.off.apply_to("off")
        };
        println!("    {:<20}{}", s.label.apply_to(toggle), state);
    }
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Saved"),
        s.path.apply_to(output.display())
    );
    if let Some(path) = preview {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Preview"),
            s.path.apply_to(path.display())
        );
    }
    println!();
}

pub fn print_visible_region(scroll: &ScrollState, rect: &Rect) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Visible Region"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scroll"),
        s.value.apply_to(format!(
            "{:.0},{:.0} of {:.0},{:.0}",
            scroll.horizontal.value,
            scroll.vertical.value,
            scroll.horizontal.maximum,
            scroll.vertical.maximum
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rect"),
        s.value.apply_to(format!(
            "{:.1},{:.1} {:.1}x{:.1}",
            rect.left, rect.top, rect.width, rect.height
        ))
    );
    println!();
}
