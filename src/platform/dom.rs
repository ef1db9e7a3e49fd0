//! DOM appliers for the two pages.
//!
//! Frames from `render` land here. Long-lived nodes are reconciled by entity
//! id instead of rebuilding the tree every frame. The game containers panic
//! at startup when missing (the page is unusable without them); lesser
//! collaborators are warned about and skipped.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::render::{BoardFrame, ScoreRow, SliceFrame, SpriteView, TrailView};
use crate::ui::{self, Screen};

pub fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

/// Required element lookup.
pub fn element(id: &str) -> Element {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("no #{} element", id))
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Text input lookup; warns and yields `None` when the page lacks it.
pub fn input(id: &str) -> Option<HtmlInputElement> {
    let Some(el) = document().get_element_by_id(id) else {
        log::warn!("no #{} input", id);
        return None;
    };
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input),
        Err(_) => {
            log::warn!("#{} is not a text input", id);
            None
        }
    }
}

/// Enable or disable a button. Missing buttons are skipped; the wiring
/// already warned about them once.
pub fn set_button_enabled(id: &str, enabled: bool) {
    if let Some(el) = document().get_element_by_id(id) {
        if let Ok(button) = el.dyn_into::<HtmlButtonElement>() {
            button.set_disabled(!enabled);
        }
    }
}

pub fn show_screen(screen: Screen) {
    set_screen_hidden(screen, false);
}

pub fn hide_screen(screen: Screen) {
    set_screen_hidden(screen, true);
}

fn set_screen_hidden(screen: Screen, hidden: bool) {
    let Some(el) = document().get_element_by_id(screen.element_id()) else {
        log::warn!("no #{} overlay", screen.element_id());
        return;
    };
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1(ui::HIDDEN_CLASS)
    } else {
        classes.remove_1(ui::HIDDEN_CLASS)
    };
}

/// Keyed applier for falling-animal nodes inside the play area.
pub struct SpriteLayer {
    area: Element,
    nodes: HashMap<u32, HtmlElement>,
}

impl SpriteLayer {
    pub fn new(area: Element) -> Self {
        Self {
            area,
            nodes: HashMap::new(),
        }
    }

    pub fn apply(&mut self, sprites: &[SpriteView]) {
        for sprite in sprites {
            if !self.nodes.contains_key(&sprite.id) {
                let node = self.spawn_node(sprite);
                self.nodes.insert(sprite.id, node);
            }
            let node = &self.nodes[&sprite.id];
            let style = node.style();
            let _ = style.set_property("left", &format!("{}px", sprite.left));
            let _ = style.set_property("top", &format!("{}px", sprite.top));
            if sprite.sliced {
                let _ = node.class_list().add_1("fruit--sliced");
            }
        }

        self.nodes.retain(|id, node| {
            let live = sprites.iter().any(|sprite| sprite.id == *id);
            if !live {
                node.remove();
            }
            live
        });
    }

    fn spawn_node(&self, sprite: &SpriteView) -> HtmlElement {
        let node: HtmlElement = document()
            .create_element("div")
            .expect("create fruit node")
            .dyn_into()
            .expect("div is an html element");
        node.set_class_name("fruit");
        node.set_inner_html(&format!(
            "<img src=\"{}\" alt=\"{}\" /><span>{}</span>",
            sprite.image, sprite.name, sprite.name
        ));
        let _ = self.area.append_child(&node);
        node
    }
}

/// Keyed applier for swipe-trail dots. Dots never move once placed.
pub struct TrailLayer {
    layer: Element,
    nodes: HashMap<u32, HtmlElement>,
}

impl TrailLayer {
    pub fn new(layer: Element) -> Self {
        Self {
            layer,
            nodes: HashMap::new(),
        }
    }

    pub fn apply(&mut self, trail: &[TrailView]) {
        for dot in trail {
            if self.nodes.contains_key(&dot.id) {
                continue;
            }
            let node: HtmlElement = document()
                .create_element("div")
                .expect("create slice dot")
                .dyn_into()
                .expect("div is an html element");
            node.set_class_name("slice-dot");
            let style = node.style();
            let _ = style.set_property("left", &format!("{}px", dot.x));
            let _ = style.set_property("top", &format!("{}px", dot.y));
            let _ = self.layer.append_child(&node);
            self.nodes.insert(dot.id, node);
        }

        self.nodes.retain(|id, node| {
            let live = trail.iter().any(|dot| dot.id == *id);
            if !live {
                node.remove();
            }
            live
        });
    }
}

/// Apply a full falling-object frame: sprites, trail, and HUD text.
pub fn apply_slice_frame(sprites: &mut SpriteLayer, trail: &mut TrailLayer, frame: &SliceFrame) {
    sprites.apply(&frame.sprites);
    trail.apply(&frame.trail);

    let hud = &frame.hud;
    set_text("roundDisplay", &hud.round.to_string());
    set_text("categoryDisplay", hud.target);
    set_text("scoreDisplay", &hud.score.to_string());
    set_text(
        "correctDisplay",
        &ui::correct_display(hud.correct, hud.required),
    );
    set_text(
        "mistakeDisplay",
        &ui::mistake_display(hud.mistakes, hud.mistake_limit),
    );
}

/// Build the grid cells fresh, row-major.
pub fn build_board(board: &Element, side: usize) -> Vec<Element> {
    board.set_inner_html("");
    let document = document();
    let mut cells = Vec::with_capacity(side * side);
    for index in 0..side * side {
        let cell = document.create_element("div").expect("create cell");
        cell.set_class_name("cell");
        let _ = cell.set_attribute("role", "gridcell");
        let _ = cell.set_attribute("data-index", &index.to_string());
        let _ = board.append_child(&cell);
        cells.push(cell);
    }
    cells
}

/// Paint one snake frame onto prebuilt cells and refresh the stats line.
pub fn apply_board_frame(cells: &[Element], frame: &BoardFrame) {
    for (cell, class) in cells.iter().zip(frame.cells.iter()) {
        cell.set_class_name(class.class_name());
    }
    set_text("score", &frame.hud.score.to_string());
    set_text("length", &frame.hud.length.to_string());
}

/// Rebuild the saved-scores list from projected rows.
pub fn render_score_list(list: &Element, rows: &[ScoreRow]) {
    list.set_inner_html("");
    let document = document();

    for row in rows {
        let item = document.create_element("li").expect("create li");
        match row {
            ScoreRow::Placeholder(text) => item.set_text_content(Some(text)),
            ScoreRow::Entry { name, score } => {
                let name_el = document.create_element("span").expect("create span");
                name_el.set_text_content(Some(name));
                let score_el = document.create_element("span").expect("create span");
                score_el.set_text_content(Some(&score.to_string()));
                let _ = item.append_child(&name_el);
                let _ = item.append_child(&score_el);
            }
        }
        let _ = list.append_child(&item);
    }
}
