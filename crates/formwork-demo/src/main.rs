#![forbid(unsafe_code)]

//! Formwork demo: a painting quotation form driven by a scripted
//! sequence of actions.
//!
//! # Running
//!
//! ```sh
//! cargo run -p formwork-demo
//! ```
//!
//! The script edits the quotation the way a user would: fill in the
//! client, add and duplicate work lines, switch rooms, then open an
//! embedded work order, commit it, and print the resulting deep link.

use chrono::NaiveDate;
use formwork_core::{EntityId, FormContext, FormData, MemoryCache, Widget, flatten};
use formwork_runtime::{
    EmbeddedRecordAction, EmbeddedRecordOptions, EmbeddedRecordState, FormHost, GenerateRequest,
    encode_path,
};
use formwork_widgets::{
    CheckboxWidget, DateWidget, ListAction, ListWidget, NumberAction, NumberWidget, TabsWidget,
    TextAction, TextWidget, record_widget,
};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotationLine {
    id: EntityId,
    description: String,
    quantity: f64,
}

impl FormData for QuotationLine {
    fn reassign_id(&mut self) {
        self.id = EntityId::fresh();
    }
}

record_widget! {
    /// Editor for one line of work on the quotation.
    pub struct LineWidget for QuotationLine {
        state: LineState,
        action: LineAction,
        fields: {
            description / Description: TextWidget = TextWidget::new().placeholder("What is being done"),
            quantity / Quantity: NumberWidget = NumberWidget::new().non_zero(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    id: EntityId,
    name: String,
    lines: Vec<QuotationLine>,
}

impl FormData for Room {
    fn reassign_id(&mut self) {
        self.id = EntityId::fresh();
    }
}

record_widget! {
    /// Editor for one room, with its own list of work lines.
    pub struct RoomWidget for Room {
        state: RoomState,
        action: RoomAction,
        fields: {
            name / Name: TextWidget = TextWidget::new(),
            lines / Lines: ListWidget<LineWidget> =
                ListWidget::new(LineWidget::new()).add_label("Add line"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quotation {
    id: EntityId,
    client: String,
    issued: Option<NaiveDate>,
    approved: bool,
    rooms: Vec<Room>,
}

impl FormData for Quotation {
    fn reassign_id(&mut self) {
        self.id = EntityId::fresh();
    }
}

record_widget! {
    /// The whole quotation: header fields plus rooms as tabs.
    pub struct QuotationWidget for Quotation {
        state: QuotationState,
        action: QuotationAction,
        fields: {
            client / Client: TextWidget = TextWidget::new().placeholder("Client or site"),
            issued / Issued: DateWidget = DateWidget::new().optional(),
            approved / Approved: CheckboxWidget = CheckboxWidget::new(),
            rooms / Rooms: TabsWidget<RoomWidget> = TabsWidget::new(RoomWidget::new())
                .title(|room: &Room| {
                    if room.name.is_empty() {
                        "Unnamed room".to_string()
                    } else {
                        room.name.clone()
                    }
                })
                .add_label("Add room")
                .adapt_new(|mut room, _existing, name, _ctx| {
                    if let Some(name) = name {
                        room.name = name.to_string();
                    }
                    Some(room)
                }),
        }
    }
}

fn line(description: &str, quantity: f64) -> QuotationLine {
    QuotationLine {
        id: EntityId::fresh(),
        description: description.into(),
        quantity,
    }
}

fn seed_quotation() -> Quotation {
    Quotation {
        id: EntityId::fresh(),
        client: String::new(),
        issued: None,
        approved: false,
        rooms: vec![Room {
            id: EntityId::fresh(),
            name: "Kitchen".into(),
            lines: vec![line("strip wallpaper", 3.0)],
        }],
    }
}

fn report_errors(host: &FormHost<QuotationWidget>, cache: &MemoryCache) {
    let errors = flatten(&host.validate(cache));
    if errors.is_empty() {
        tracing::info!("quotation is valid");
    } else {
        for error in &errors {
            tracing::info!(path = %error.path, empty = error.empty, invalid = error.invalid, "validation");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap_or_default();
    let ctx = FormContext::new()
        .with_user(EntityId::fresh())
        .with_today(today);
    let mut cache = MemoryCache::new();
    cache.insert("template", EntityId::fresh(), json!({"name": "quotation-pdf"}));

    let mut host = FormHost::new(QuotationWidget::new(), seed_quotation(), ctx.clone());

    tracing::info!("initial state");
    report_errors(&host, &cache);

    // Fill in the header the way a user types it: raw value first, blur
    // normalizes it.
    host.dispatch(QuotationAction::Client(TextAction::Set(
        "  Mercer St walk-up  ".into(),
    )));
    host.dispatch(QuotationAction::Client(TextAction::Blur));
    tracing::info!(client = %host.data().client, "client set");

    // Work in the kitchen: add a line, fix its quantity, duplicate an
    // existing one.
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 0,
        action: RoomAction::Lines(ListAction::New { name: None }),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 0,
        action: RoomAction::Lines(ListAction::Item {
            index: 1,
            action: LineAction::Description(TextAction::Set("skim coat ceiling".into())),
        }),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 0,
        action: RoomAction::Lines(ListAction::Item {
            index: 1,
            action: LineAction::Quantity(NumberAction::Set("12.5".into())),
        }),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 0,
        action: RoomAction::Lines(ListAction::Duplicate {
            index: 0,
            action: Some(LineAction::Description(TextAction::Set(
                "strip wallpaper, pantry wall".into(),
            ))),
        }),
    }));

    // A second room via the adapter's name seeding; `New` selects it.
    host.dispatch(QuotationAction::Rooms(ListAction::New {
        name: Some("Parlor".into()),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 1,
        action: RoomAction::Lines(ListAction::New { name: None }),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 1,
        action: RoomAction::Lines(ListAction::Item {
            index: 0,
            action: LineAction::Description(TextAction::Set("two coats, walls only".into())),
        }),
    }));
    host.dispatch(QuotationAction::Rooms(ListAction::Item {
        index: 1,
        action: RoomAction::Lines(ListAction::Item {
            index: 0,
            action: LineAction::Quantity(NumberAction::Set("8".into())),
        }),
    }));

    report_errors(&host, &cache);
    let link = encode_path(&host.encode_path());
    tracing::info!(%link, "deep link to the current screen");

    // Drill into an embedded work order without leaving the quotation.
    let order_widget = LineWidget::new();
    let machine = EmbeddedRecordState::default()
        .reduce(&order_widget, EmbeddedRecordAction::OpenNew(order_widget.empty()), &ctx)
        .reduce(
            &order_widget,
            EmbeddedRecordAction::Item(LineAction::Description(TextAction::Set(
                "touch up front door".into(),
            ))),
            &ctx,
        )
        .reduce(
            &order_widget,
            EmbeddedRecordAction::Item(LineAction::Quantity(NumberAction::Set("1".into()))),
            &ctx,
        );

    let options = EmbeddedRecordOptions::new().generate_requests(|order: &QuotationLine, _cache| {
        vec![GenerateRequest::new("work-order-sheet").parameter(order.id.to_string())]
    });
    match machine.commit(&order_widget, &options, &ctx, &cache) {
        Ok(outcome) => {
            tracing::info!(
                was_new = outcome.was_new,
                requests = outcome.requests.len(),
                "embedded record committed"
            );
            let machine = machine.reduce(&order_widget, EmbeddedRecordAction::Reset, &ctx);
            tracing::info!(open = machine.is_open(), "editor closed");
        }
        Err(err) => tracing::warn!(%err, "embedded record refused"),
    }

    println!("final quotation: {:#?}", host.data());
}
