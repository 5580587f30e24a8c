//! Renderer
//!
//! Pure functions from view state to view models. Each gallery panel maps to
//! one [`PanelView`] variant; the employee list maps to an [`EmployeeView`]
//! whose layout is chosen by [`ViewMode`] alone. The CLI prints these with
//! [`text`]; the web UI turns them into Leptos components.

pub mod text;

use serde::Serialize;

use crate::employees::{Employee, EmployeeDashboard, ViewMode};
use crate::gallery::catalog::{self, Artwork, ArtworkId};
use crate::gallery::{Panel, PanelId};

/// Description excerpt length on grid cards
pub const EXCERPT_CHARS: usize = 100;

/// Column headings of the table layout
pub const TABLE_COLUMNS: [&str; 3] = ["ID", "Name", "Email"];

/// One clickable artwork card; clicking opens the detail panel for `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtCard {
    pub id: ArtworkId,
    pub title: &'static str,
    pub artist: &'static str,
    pub image: &'static str,
    pub year: Option<i32>,
    pub excerpt: Option<String>,
}

impl ArtCard {
    /// Home panel card: title, artist, year
    pub fn featured(art: &'static Artwork) -> Self {
        Self {
            id: art.id,
            title: art.title,
            artist: art.artist,
            image: art.image,
            year: Some(art.year),
            excerpt: None,
        }
    }

    /// Grid card: featured fields plus a description excerpt
    pub fn grid(art: &'static Artwork) -> Self {
        Self {
            excerpt: Some(format!("{}...", art.excerpt(EXCERPT_CHARS))),
            ..Self::featured(art)
        }
    }

    /// Similar-artwork card: title and artist only
    pub fn similar(art: &'static Artwork) -> Self {
        Self {
            year: None,
            ..Self::featured(art)
        }
    }
}

/// Everything the detail panel shows about one artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtDetail {
    pub id: ArtworkId,
    pub title: &'static str,
    pub artist: &'static str,
    pub year: i32,
    pub description: &'static str,
    pub image: &'static str,
}

impl From<&'static Artwork> for ArtDetail {
    fn from(art: &'static Artwork) -> Self {
        Self {
            id: art.id,
            title: art.title,
            artist: art.artist,
            year: art.year,
            description: art.description,
            image: art.image,
        }
    }
}

/// Gallery panel view model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum PanelView {
    Login,
    Signup,
    Home { featured: Vec<ArtCard> },
    Grid { cards: Vec<ArtCard> },
    Detail { detail: ArtDetail, similar: Vec<ArtCard> },
}

impl PanelView {
    pub fn id(&self) -> PanelId {
        match self {
            PanelView::Login => PanelId::Login,
            PanelView::Signup => PanelId::Signup,
            PanelView::Home { .. } => PanelId::Home,
            PanelView::Grid { .. } => PanelId::Grid,
            PanelView::Detail { .. } => PanelId::Detail,
        }
    }

    pub fn shows_navbar(&self) -> bool {
        self.id().shows_navbar()
    }
}

/// Cards for the home panel: the featured subset, in order
pub fn featured_cards() -> Vec<ArtCard> {
    catalog::featured().iter().map(ArtCard::featured).collect()
}

/// Cards for the grid panel: the whole collection, in order
pub fn grid_cards() -> Vec<ArtCard> {
    catalog::artworks().iter().map(ArtCard::grid).collect()
}

/// Render a gallery panel
pub fn panel_view(panel: &Panel) -> PanelView {
    match panel {
        Panel::Login => PanelView::Login,
        Panel::Signup => PanelView::Signup,
        Panel::Home => PanelView::Home {
            featured: featured_cards(),
        },
        Panel::Grid => PanelView::Grid { cards: grid_cards() },
        Panel::Detail { artwork, similar } => match catalog::find(*artwork) {
            Some(art) => PanelView::Detail {
                detail: ArtDetail::from(art),
                similar: similar
                    .iter()
                    .filter_map(|id| catalog::find(*id))
                    .map(ArtCard::similar)
                    .collect(),
            },
            None => PanelView::Grid { cards: grid_cards() },
        },
    }
}

/// One employee as every layout shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl EmployeeRow {
    /// Id caption shown under the name in the card and list layouts
    pub fn id_label(&self) -> String {
        format!("ID: {}", self.id)
    }
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            email: e.email.clone(),
        }
    }
}

/// The employee list in a given layout. Rows are identical across layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeView {
    pub mode: ViewMode,
    pub rows: Vec<EmployeeRow>,
}

pub fn employee_view(employees: &[Employee], mode: ViewMode) -> EmployeeView {
    EmployeeView {
        mode,
        rows: employees.iter().map(EmployeeRow::from).collect(),
    }
}

/// What the dashboard home page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DashboardView {
    Loading,
    Error { message: String },
    Employees(EmployeeView),
}

pub fn dashboard_view(dash: &EmployeeDashboard) -> DashboardView {
    if dash.is_loading() {
        DashboardView::Loading
    } else if let Some(message) = dash.error() {
        DashboardView::Error {
            message: message.to_string(),
        }
    } else {
        DashboardView::Employees(employee_view(dash.employees(), dash.view_mode()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::employees::FetchError;
    use crate::gallery::GalleryApp;
    use crate::random::Prng;

    #[test]
    fn test_featured_is_stable() {
        let mut app = GalleryApp::with_rng(&UiConfig::default(), Prng::new(5));
        for _ in 0..3 {
            app.navigate(PanelId::Home);
            match panel_view(app.panel()) {
                PanelView::Home { featured } => {
                    let ids: Vec<_> = featured.iter().map(|c| c.id).collect();
                    assert_eq!(ids, vec![1, 2, 3]);
                }
                other => panic!("expected home, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_grid_shows_all_with_excerpt() {
        let cards = grid_cards();
        assert_eq!(cards.len(), 5);
        for card in &cards {
            let excerpt = card.excerpt.as_deref().unwrap();
            assert!(excerpt.ends_with("..."));
            assert_eq!(excerpt.chars().count(), EXCERPT_CHARS + 3);
        }
    }

    #[test]
    fn test_detail_view_shows_selected_artwork() {
        let mut app = GalleryApp::with_rng(&UiConfig::default(), Prng::new(5));
        app.show_art_detail(1).unwrap();

        match panel_view(app.panel()) {
            PanelView::Detail { detail, similar } => {
                assert_eq!(detail.title, "Starry Night");
                assert_eq!(detail.artist, "Vincent van Gogh");
                assert_eq!(detail.year, 1889);
                assert!(similar.iter().all(|c| c.id != 1 && c.year.is_none()));
            }
            other => panic!("expected detail, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_never_mixes_artworks() {
        let mut app = GalleryApp::with_rng(&UiConfig::default(), Prng::new(8));
        for art in catalog::artworks() {
            app.show_art_detail(art.id).unwrap();
            let PanelView::Detail { detail, .. } = panel_view(app.panel()) else {
                panic!("expected detail");
            };
            assert_eq!(detail.id, art.id);
            assert_eq!(detail.title, art.title);
            assert_eq!(detail.artist, art.artist);
            assert_eq!(detail.year, art.year);
        }
    }

    #[test]
    fn test_navbar_visibility() {
        assert!(!panel_view(&Panel::Login).shows_navbar());
        assert!(!panel_view(&Panel::Signup).shows_navbar());
        assert!(panel_view(&Panel::Grid).shows_navbar());
    }

    #[test]
    fn test_layouts_share_rows() {
        let employees = vec![
            Employee::new(1, "Leanne Graham", "Sincere@april.biz"),
            Employee::new(2, "Ervin Howell", "Shanna@melissa.tv"),
        ];
        let views: Vec<_> = ViewMode::ALL
            .iter()
            .map(|m| employee_view(&employees, *m))
            .collect();
        assert!(views.windows(2).all(|w| w[0].rows == w[1].rows));
    }

    #[test]
    fn test_every_layout_carries_the_id() {
        let employees = vec![Employee::new(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz")];
        for mode in ViewMode::ALL {
            let view = employee_view(&employees, mode);
            assert_eq!(view.rows[0].id_label(), "ID: 7");
        }
    }

    #[test]
    fn test_dashboard_states() {
        let mut dash = EmployeeDashboard::default();
        assert_eq!(dashboard_view(&dash), DashboardView::Loading);

        dash.apply_fetch(Err(FetchError::Status(404)));
        assert_eq!(
            dashboard_view(&dash),
            DashboardView::Error {
                message: "Request failed with status 404".to_string()
            }
        );

        dash.begin_fetch();
        dash.apply_fetch(Ok(vec![Employee::new(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz")]));
        let DashboardView::Employees(view) = dashboard_view(&dash) else {
            panic!("expected employees");
        };
        assert_eq!(view.rows[0].id, 7);
    }
}
