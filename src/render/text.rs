//! Plain-text rendering for the terminal

use std::fmt::Write;

use super::{ArtCard, DashboardView, EmployeeView, PanelView, TABLE_COLUMNS};
use crate::employees::{EmployeeForm, FormField, ViewMode};

/// Render a gallery panel
pub fn panel(view: &PanelView) -> String {
    let mut out = String::new();

    if view.shows_navbar() {
        out.push_str("[ Art Gallery ]  Home | Gallery | Logout\n\n");
    }

    match view {
        PanelView::Login => {
            out.push_str("Welcome Back\n");
            out.push_str("Sign in with your email and password.\n");
        }
        PanelView::Signup => {
            out.push_str("Create Account\n");
            out.push_str("Enter your full name, email and a password.\n");
        }
        PanelView::Home { featured } => {
            out.push_str("Featured Artworks\n");
            out.push_str(&cards(featured));
        }
        PanelView::Grid { cards: grid } => {
            out.push_str("Art Collection\n");
            out.push_str(&cards(grid));
        }
        PanelView::Detail { detail, similar } => {
            let _ = writeln!(out, "{}", detail.title);
            let _ = writeln!(out, "{} ({})", detail.artist, detail.year);
            let _ = writeln!(out, "{}", detail.image);
            let _ = writeln!(out, "\n{}\n", detail.description);
            out.push_str("Similar Artworks\n");
            out.push_str(&cards(similar));
        }
    }

    out
}

fn cards(cards: &[ArtCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = write!(out, "  #{} {} - {}", card.id, card.title, card.artist);
        if let Some(year) = card.year {
            let _ = write!(out, " ({})", year);
        }
        out.push('\n');
        if let Some(excerpt) = &card.excerpt {
            let _ = writeln!(out, "     {}", excerpt);
        }
    }
    out
}

/// Render the dashboard home page
pub fn dashboard(view: &DashboardView) -> String {
    match view {
        DashboardView::Loading => "Loading employees...\n".to_string(),
        DashboardView::Error { message } => format!("Error: {}\n", message),
        DashboardView::Employees(employees) => employee_list(employees),
    }
}

/// Render the employee list in its layout
pub fn employee_list(view: &EmployeeView) -> String {
    if view.rows.is_empty() {
        return "No employees found.\n".to_string();
    }

    let mut out = String::new();
    match view.mode {
        ViewMode::Table => {
            let id_w = view
                .rows
                .iter()
                .map(|r| r.id.to_string().len())
                .chain([TABLE_COLUMNS[0].len()])
                .max()
                .unwrap_or(2);
            let name_w = view
                .rows
                .iter()
                .map(|r| r.name.chars().count())
                .chain([TABLE_COLUMNS[1].len()])
                .max()
                .unwrap_or(4);

            let _ = writeln!(
                out,
                "{:<id_w$}  {:<name_w$}  {}",
                TABLE_COLUMNS[0], TABLE_COLUMNS[1], TABLE_COLUMNS[2]
            );
            let _ = writeln!(out, "{}  {}  {}", "-".repeat(id_w), "-".repeat(name_w), "-----");
            for row in &view.rows {
                let _ = writeln!(out, "{:<id_w$}  {:<name_w$}  {}", row.id, row.name, row.email);
            }
        }
        ViewMode::Card => {
            for row in &view.rows {
                let _ = writeln!(out, "+ {}", row.name);
                let _ = writeln!(out, "|   {}", row.id_label());
                let _ = writeln!(out, "|   {}", row.email);
            }
        }
        ViewMode::List => {
            for row in &view.rows {
                let _ = writeln!(out, "- {} <{}> ({})", row.name, row.email, row.id_label());
            }
        }
    }
    out
}

/// Inline validation messages, one per line, in field order
pub fn form_errors(form: &EmployeeForm) -> String {
    let mut out = String::new();
    for field in FormField::ALL {
        if let Some(msg) = form.error(field) {
            let _ = writeln!(out, "  {}: {}", field.label(), msg);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employees::Employee;
    use crate::gallery::Panel;
    use crate::render::{employee_view, panel_view};

    #[test]
    fn test_login_has_no_navbar() {
        let text = panel(&panel_view(&Panel::Login));
        assert!(!text.contains("Logout"));
        assert!(text.starts_with("Welcome Back"));
    }

    #[test]
    fn test_home_lists_featured_in_order() {
        let text = panel(&panel_view(&Panel::Home));
        let starry = text.find("Starry Night").unwrap();
        let comp = text.find("Composition VIII").unwrap();
        let mist = text.find("Mountain Mist").unwrap();
        assert!(starry < comp && comp < mist);
        assert!(!text.contains("The Thinker"));
    }

    #[test]
    fn test_layouts() {
        let employees = vec![Employee::new(1, "Leanne Graham", "Sincere@april.biz")];

        let table = employee_list(&employee_view(&employees, ViewMode::Table));
        assert!(table.lines().next().unwrap().starts_with("ID"));
        assert!(table.contains("Leanne Graham"));

        let cards = employee_list(&employee_view(&employees, ViewMode::Card));
        assert!(cards.contains("|   ID: 1\n"));

        let list = employee_list(&employee_view(&employees, ViewMode::List));
        assert_eq!(list, "- Leanne Graham <Sincere@april.biz> (ID: 1)\n");
    }

    #[test]
    fn test_dashboard_error() {
        let text = dashboard(&DashboardView::Error {
            message: "Network error: refused".to_string(),
        });
        assert_eq!(text, "Error: Network error: refused\n");
    }

    #[test]
    fn test_form_errors() {
        let mut form = EmployeeForm::default();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Designation, "Engineer");
        form.set(FormField::Location, "London");
        form.set(FormField::Salary, "-1");
        let _ = form.submit(0);
        assert_eq!(form_errors(&form), "  Salary: Salary must be greater than zero\n");
    }
}
