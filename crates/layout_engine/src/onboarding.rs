//! Onboarding form export
//!
//! Walks a [`FormState`] snapshot section by section in a fixed order and
//! draws it onto a [`RenderSurface`]: a timestamp and title header, then
//! Account Information, Primary Business Case, Goals, Key Players, Technical
//! Stack, Open Issues, Beta Features of Interest, Organization ID, Feature
//! Requests and Trouble Areas. Sections with no content still get their
//! title and padding.
//!
//! Free text is wrapped before it is checked for overflow, and the wrapped
//! line count is the only height used for both the check and the advance.

use crate::{
    export_file_name, Block, LayoutMetrics, LineGroup, PageCursor, PageGeometry, Result,
};
use chrono::{DateTime, Utc};
use form_model::{FeatureRequest, FormState, GoalHorizon, Issue, KeyPlayer, StackCategory};
use render_model::{
    Document, DocumentSink, FontStyle, RecordingSurface, RenderSurface, TextAlign,
};

/// Title drawn at the top of the first page
pub const DOCUMENT_TITLE: &str = "Onboarding Form";

/// Section titles in the order they are drawn
pub const SECTION_TITLES: [&str; 10] = [
    "Account Information",
    "Primary Business Case",
    "Goals",
    "Key Players",
    "Technical Stack",
    "Open Issues",
    "Beta Features of Interest",
    "Organization ID",
    "Feature Requests",
    "Trouble Areas",
];

const BULLET: &str = "\u{2022}";

/// Result of a completed export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub document: Document,
    pub file_name: String,
}

/// Lays out onboarding forms as paginated documents
#[derive(Debug, Clone, Default)]
pub struct OnboardingExporter {
    geometry: PageGeometry,
    metrics: LayoutMetrics,
}

impl OnboardingExporter {
    /// Exporter for A4 pages with the default spacing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(geometry: PageGeometry) -> Result<Self> {
        let metrics = LayoutMetrics::default();
        geometry.validate(&metrics)?;
        Ok(Self { geometry, metrics })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Lay out `state` on a recording surface and save it through `sink`
    pub fn export<K: DocumentSink>(
        &self,
        state: &FormState,
        sink: K,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportOutcome> {
        let mut surface = RecordingSurface::new(self.geometry.width, self.geometry.height, sink);
        let file_name = self.export_to(state, &mut surface, generated_at)?;
        let (document, _) = surface.into_parts();

        tracing::info!(
            "exported onboarding form as {} ({} pages)",
            file_name,
            document.page_count()
        );

        Ok(ExportOutcome {
            document,
            file_name,
        })
    }

    /// Draw `state` onto `surface`, save it once, and return the file name
    pub fn export_to<S: RenderSurface + ?Sized>(
        &self,
        state: &FormState,
        surface: &mut S,
        generated_at: DateTime<Utc>,
    ) -> Result<String> {
        let mut pass = LayoutPass {
            surface,
            cursor: PageCursor::new(self.geometry, self.metrics),
            geometry: self.geometry,
            metrics: self.metrics,
        };
        pass.header(generated_at);
        pass.account_information(state);
        pass.paragraph_section(SECTION_TITLES[1], &state.primary_business_case);
        pass.goals(state);
        pass.key_players(&state.key_players);
        pass.technical_stack(state);
        pass.open_issues(&state.open_issues);
        pass.paragraph_section(SECTION_TITLES[6], &state.beta_features);
        pass.cursor.advance(self.metrics.beta_features_gap);
        pass.organization_id(&state.org_id);
        pass.feature_requests(&state.feature_requests);
        pass.paragraph_section(SECTION_TITLES[9], &state.trouble_areas);

        let file_name = export_file_name(&state.account_name, generated_at);
        pass.surface.save_as(&file_name)?;
        Ok(file_name)
    }
}

/// State of one layout walk
struct LayoutPass<'a, S: RenderSurface + ?Sized> {
    surface: &'a mut S,
    cursor: PageCursor,
    geometry: PageGeometry,
    metrics: LayoutMetrics,
}

impl<S: RenderSurface + ?Sized> LayoutPass<'_, S> {
    fn body_font(&mut self) {
        self.surface.set_font_size(self.metrics.font_sizes.body);
        self.surface.set_font_style(FontStyle::Normal);
    }

    fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        self.surface.measure_wrapped_lines(text, max_width)
    }

    fn header(&mut self, generated_at: DateTime<Utc>) {
        let sizes = self.metrics.font_sizes;
        let timestamp = format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

        self.surface.set_font_size(sizes.timestamp);
        self.surface.set_font_style(FontStyle::Normal);
        self.surface.draw_text(
            &timestamp,
            self.geometry.width - self.geometry.margin,
            self.cursor.y(),
            TextAlign::Right,
        );
        self.cursor.advance(self.metrics.timestamp_gap);

        self.surface.set_font_size(sizes.title);
        self.surface.set_font_style(FontStyle::Bold);
        self.surface.draw_text(
            DOCUMENT_TITLE,
            self.geometry.width / 2.0,
            self.cursor.y(),
            TextAlign::Center,
        );
        self.cursor.advance(self.metrics.title_block_gap);
    }

    fn section_title(&mut self, title: &str) {
        self.cursor.ensure_space(self.surface, self.metrics.section_reserve);

        self.surface.set_font_size(self.metrics.font_sizes.section);
        self.surface.set_font_style(FontStyle::Bold);
        self.surface
            .draw_text(title, self.geometry.margin, self.cursor.y(), TextAlign::Left);
        self.cursor.advance(self.metrics.title_gap);

        self.body_font();
    }

    /// A bulleted body line at the margin, followed by section padding
    fn bullet_line(&mut self, text: &str) {
        let lines = self.wrap(&format!("{BULLET} {text}"), self.geometry.content_width());
        let block = Block::paragraph(self.geometry.margin, lines)
            .with_gap_after(self.metrics.section_padding);
        self.cursor.place_block(self.surface, &block);
    }

    fn paragraph_section(&mut self, title: &str, content: &str) {
        self.section_title(title);

        if content.trim().is_empty() {
            self.cursor.advance(self.metrics.section_padding);
            return;
        }

        let lines = self.wrap(content, self.geometry.content_width());
        let block = Block::paragraph(self.geometry.margin, lines)
            .with_gap_after(self.metrics.section_padding);
        self.cursor.place_block(self.surface, &block);
    }

    fn account_information(&mut self, state: &FormState) {
        self.section_title(SECTION_TITLES[0]);
        self.bullet_line(&format!("Account Name: {}", state.account_name));
    }

    fn goals(&mut self, state: &FormState) {
        self.section_title(SECTION_TITLES[2]);

        let value_x = self.geometry.margin + self.metrics.detail_indent;
        let value_width = self.geometry.content_width() - self.metrics.goal_wrap_inset;
        let last = GoalHorizon::ALL.len() - 1;

        for (i, horizon) in GoalHorizon::ALL.into_iter().enumerate() {
            self.cursor.ensure_space(self.surface, self.metrics.goal_reserve);

            self.surface.set_font_style(FontStyle::Bold);
            self.surface.draw_text(
                &format!("{BULLET} {}:", horizon.label()),
                self.geometry.margin,
                self.cursor.y(),
                TextAlign::Left,
            );
            self.cursor.advance(self.metrics.line_height);
            self.surface.set_font_style(FontStyle::Normal);

            let gap = if i == last {
                self.metrics.last_goal_gap
            } else {
                self.metrics.goal_gap
            };
            let lines = self.wrap(state.goals.get(horizon), value_width);
            let block = Block::paragraph(value_x, lines).with_gap_after(gap);
            self.cursor.place_block(self.surface, &block);
        }
    }

    /// One list item: a bold `Item N:` header and indented `Label: value` lines
    fn list_item(&mut self, number: usize, details: &[(&str, String)], estimate: f32) {
        let detail_x = self.geometry.margin + self.metrics.detail_indent;
        let detail_width = self.geometry.content_width() - self.metrics.detail_indent;

        let mut lines = Vec::new();
        for (label, value) in details {
            lines.extend(self.wrap(&format!("{label}: {value}"), detail_width));
        }

        let header = LineGroup::new(
            self.geometry.margin,
            FontStyle::Bold,
            vec![format!("{BULLET} Item {number}:")],
        );
        let mut block = Block::new()
            .with_group(header)
            .with_group(LineGroup::new(detail_x, FontStyle::Normal, lines))
            .with_gap_after(self.metrics.item_gap);
        let measured = block.drawn_height(&self.metrics) + self.metrics.item_gap;
        block.reserve = estimate.max(measured);

        self.cursor.place_block(self.surface, &block);
        self.surface.set_font_style(FontStyle::Normal);
    }

    fn key_players(&mut self, players: &[KeyPlayer]) {
        self.section_title(SECTION_TITLES[3]);
        for (i, player) in players.iter().enumerate() {
            let details = [
                ("Name", player.name.clone()),
                ("Focus Area", player.focus_area.clone()),
                ("Geographic Location", player.geographic_location.clone()),
                ("KPIs", player.kpis.clone()),
            ];
            self.list_item(i + 1, &details, self.metrics.key_player_estimate);
        }
    }

    fn open_issues(&mut self, issues: &[Issue]) {
        self.section_title(SECTION_TITLES[5]);
        for (i, issue) in issues.iter().enumerate() {
            let details = [
                ("Description", issue.description.clone()),
                ("Priority", issue.priority.to_string()),
                ("Status", issue.status.to_string()),
                ("Due Date", issue.due_date_label()),
            ];
            self.list_item(i + 1, &details, self.metrics.issue_estimate);
        }
    }

    fn feature_requests(&mut self, requests: &[FeatureRequest]) {
        self.section_title(SECTION_TITLES[8]);
        for (i, request) in requests.iter().enumerate() {
            let details = [
                ("Description", request.description.clone()),
                ("Priority", request.priority.to_string()),
                ("Status", request.status.to_string()),
                ("Due Date", request.due_date_label()),
                ("Ticket Link", request.ticket_link.clone()),
                ("Jira Link", request.jira_link.clone()),
            ];
            self.list_item(i + 1, &details, self.metrics.feature_request_estimate);
        }
    }

    fn technical_stack(&mut self, state: &FormState) {
        self.section_title(SECTION_TITLES[4]);

        let stack = &state.technical_stack;
        let mut entries = Vec::with_capacity(8);
        for (category, selection) in stack.iter() {
            entries.push((category.key().to_string(), selection.display_value()));
            if category == StackCategory::SourceControl {
                let answer = stack.multi_token.map(|v| v.label()).unwrap_or_default();
                entries.push(("multiToken".to_string(), answer.to_string()));
            }
        }

        for (key, value) in entries {
            let lines = self.wrap(
                &format!("{BULLET} {key}: {value}"),
                self.geometry.content_width(),
            );
            let block = Block::paragraph(self.geometry.margin, lines)
                .with_reserve(self.metrics.stack_line_reserve);
            self.cursor.place_block(self.surface, &block);
        }
        self.cursor.advance(self.metrics.section_padding);
    }

    fn organization_id(&mut self, org_id: &str) {
        self.section_title(SECTION_TITLES[7]);
        if org_id.trim().is_empty() {
            self.cursor.advance(self.metrics.section_padding);
        } else {
            self.bullet_line(org_id);
        }
    }
}
