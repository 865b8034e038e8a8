// SPDX-License-Identifier: MPL-2.0
//! View rendering for the intake panel.

use super::{Message, State};
use crate::domain::intake::{format_size, FileEntry};
use crate::i18n::fluent::I18n;
use crate::intake::{IntakeManager, PreviewContent, PreviewState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use chrono::{DateTime, Local};
use iced::widget::{
    button, center, container, image, mouse_area, opaque, rule, scrollable, stack, Column, Row,
    Space, Text,
};
use iced::{alignment, ContentFit, Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manager: &'a IntakeManager,
    pub state: &'a State,
}

/// Renders the panel, with the preview modal on top when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = if ctx.manager.is_visible() {
        surface(&ctx)
    } else {
        landing(&ctx)
    };

    if ctx.manager.preview_state().is_open() {
        stack![base, preview_modal(&ctx)].into()
    } else {
        base
    }
}

/// Shown while the intake surface is hidden: a short hint and the picker.
fn landing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("intake-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("intake-drop-hint")).size(typography::BODY))
        .push(browse_button(ctx));

    center(content).into()
}

fn surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let manager = ctx.manager;

    let count = manager.file_count().to_string();
    let total = format_size(manager.total_size());
    let summary = ctx
        .i18n
        .tr_with_args("intake-summary", &[("count", count.as_str()), ("size", total.as_str())]);
    let header = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("intake-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(summary).size(typography::BODY));

    let drop_label = if manager.is_dragging() {
        ctx.i18n.tr("intake-drop-active")
    } else {
        ctx.i18n.tr("intake-drop-hint")
    };
    let drop_zone = container(Text::new(drop_label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::drop_zone(manager.is_dragging()));

    let list: Element<'a, Message> = if manager.has_files() {
        let rows = manager
            .entries()
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, entry| {
                column.push(file_row(ctx.i18n, entry))
            });
        scrollable(rows)
            .height(Length::Shrink)
            .into()
    } else {
        Text::new(ctx.i18n.tr("intake-empty"))
            .size(typography::BODY)
            .into()
    };
    let list = container(list).max_height(sizing::LIST_MAX_HEIGHT);

    let clear_button = button(Text::new(ctx.i18n.tr("intake-clear-all")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::danger)
        .on_press_maybe(manager.has_files().then_some(Message::ClearAll));

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(clear_button)
        .push(browse_button(ctx));

    let panel = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(rule::horizontal(1))
        .push(drop_zone)
        .push(list)
        .push(footer);

    center(
        container(panel)
            .max_width(sizing::PANEL_MAX_WIDTH)
            .style(container_styles::panel),
    )
    .padding(spacing::LG)
    .into()
}

fn browse_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr("intake-browse")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::primary)
        .on_press(Message::BrowseRequested)
        .into()
}

fn file_row<'a>(i18n: &I18n, entry: &'a FileEntry) -> Element<'a, Message> {
    let file = entry.file();
    let declared = if file.mime_type().is_empty() {
        i18n.tr("intake-unknown-type")
    } else {
        file.mime_type().to_string()
    };
    let mut meta = vec![format_size(file.size()), declared];
    if let Some(modified) = format_timestamp(file.last_modified()) {
        meta.push(modified);
    }

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(entry.name()).size(typography::BODY))
        .push(Text::new(meta.join(" · ")).size(typography::CAPTION));

    let preview = button(Text::new(i18n.tr("intake-preview")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::ghost)
        .on_press(Message::PreviewRequested(entry.id()));
    let remove = button(Text::new(i18n.tr("intake-remove")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(button_styles::danger)
        .on_press(Message::RemoveEntry(entry.id()));

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(details)
            .push(preview)
            .push(remove),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(container_styles::list_row)
    .into()
}

/// Local date and time of a millisecond Unix timestamp.
fn format_timestamp(millis: i64) -> Option<String> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis).map(|utc| {
        utc.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    })
}

fn preview_modal<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let (title, body): (String, Element<'a, Message>) = match ctx.manager.preview_state() {
        PreviewState::Closed => (String::new(), Space::new().into()),
        PreviewState::Loading { name, .. } => (
            name.clone(),
            Text::new(i18n.tr("preview-loading"))
                .size(typography::BODY)
                .into(),
        ),
        PreviewState::Ready {
            entry,
            name,
            content,
        } => (
            name.clone(),
            preview_body(i18n, content, ctx.state.preview_image(*entry)),
        ),
    };

    let close = button(Text::new(i18n.tr("preview-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::ghost)
        .on_press(Message::ClosePreview);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(close);

    let card = container(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(rule::horizontal(1))
            .push(scrollable(body).height(Length::Shrink)),
    )
    .width(Length::Fixed(sizing::PREVIEW_WIDTH))
    .max_height(sizing::PREVIEW_MAX_HEIGHT)
    .padding(spacing::LG)
    .style(container_styles::modal);

    opaque(
        mouse_area(center(opaque(card)).style(container_styles::backdrop))
            .on_press(Message::ClosePreview),
    )
}

fn preview_body<'a>(
    i18n: &I18n,
    content: &'a PreviewContent,
    handle: Option<&image::Handle>,
) -> Element<'a, Message> {
    match content {
        PreviewContent::Image { width, height, .. } => {
            let (width, height) = (width.to_string(), height.to_string());
            let caption = i18n.tr_with_args(
                "preview-image-dimensions",
                &[("width", width.as_str()), ("height", height.as_str())],
            );
            let mut column = Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center);
            if let Some(handle) = handle {
                column = column.push(
                    image(handle.clone())
                        .content_fit(ContentFit::ScaleDown)
                        .width(Length::Fill),
                );
            }
            column
                .push(Text::new(caption).size(typography::CAPTION))
                .into()
        }
        PreviewContent::Text(text) => Text::new(text.as_str())
            .size(typography::MONOSPACE)
            .font(Font::MONOSPACE)
            .into(),
        PreviewContent::Document {
            name,
            size,
            last_modified,
        } => {
            let mut column = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(i18n.tr("preview-document-placeholder")).size(typography::BODY))
                .push(
                    Text::new(i18n.tr_with_args("preview-document-name", &[("name", name.as_str())]))
                        .size(typography::CAPTION),
                )
                .push(
                    Text::new(i18n.tr_with_args(
                        "preview-document-size",
                        &[("size", format_size(*size).as_str())],
                    ))
                    .size(typography::CAPTION),
                );
            if let Some(modified) = format_timestamp(*last_modified) {
                column = column.push(
                    Text::new(i18n.tr_with_args(
                        "preview-document-modified",
                        &[("date", modified.as_str())],
                    ))
                    .size(typography::CAPTION),
                );
            }
            column.into()
        }
        PreviewContent::Unsupported { declared } => {
            let declared = if declared.is_empty() {
                i18n.tr("intake-unknown-type")
            } else {
                declared.clone()
            };
            Text::new(i18n.tr_with_args("preview-unsupported", &[("type", declared.as_str())]))
                .size(typography::BODY)
                .into()
        }
        PreviewContent::Unavailable { error } => {
            let reason = i18n.tr(error.i18n_key());
            Text::new(i18n.tr_with_args("preview-unavailable", &[("reason", reason.as_str())]))
                .size(typography::BODY)
                .into()
        }
    }
}
