//! HTML backend for the employee table.

use std::fmt::Write;

use super::EmployeeTable;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the table as a `<table>` element.
pub fn render_table(table: &EmployeeTable) -> String {
    let mut html = String::from("<table>\n<tbody>\n<tr>");
    for column in table.header() {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr>\n");

    for row in table.rows() {
        match &row.key {
            Some(key) => {
                let _ = write!(html, "<tr data-key=\"{}\">", escape(key));
            }
            None => html.push_str("<tr>"),
        }
        for cell in row.cells() {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Mount the table into a container element with the given id.
pub fn mount(container: &str, table: &EmployeeTable) -> String {
    format!(
        "<div id=\"{}\">\n{}\n</div>",
        escape(container),
        render_table(table)
    )
}

/// A complete host document with the table mounted in its container.
pub fn document(container: &str, table: &EmployeeTable) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n<title>Employees</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        mount(container, table)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, Link, Links};
    use crate::view::employee_list;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "<tr><th>First Name</th><th>Last Name</th><th>Description</th><th>Job Years</th><th>Job Title</th><th>E-mail</th></tr>";

    fn ana() -> Employee {
        Employee {
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            description: Some("dev".to_string()),
            job_years: Some(3_i64.into()),
            job_title: Some("Engineer".to_string()),
            email: Some("a@x.com".to_string()),
            links: Some(Links {
                self_link: Some(Link {
                    href: "/e/1".to_string(),
                }),
            }),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_render_empty_table() {
        let html = render_table(&employee_list(&[]));
        assert_eq!(html, format!("<table>\n<tbody>\n{HEADER}\n</tbody>\n</table>"));
    }

    #[test]
    fn test_render_single_row() {
        let html = render_table(&employee_list(&[ana()]));
        let expected = format!(
            "<table>\n<tbody>\n{HEADER}\n<tr data-key=\"/e/1\"><td>Ana</td><td>Silva</td><td>dev</td><td>3</td><td>Engineer</td><td>a@x.com</td></tr>\n</tbody>\n</table>"
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let employee = Employee {
            description: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        };
        let html = render_table(&employee_list(&[employee]));
        assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("\n<tr><td></td>"));
    }

    #[test]
    fn test_mount_into_container() {
        let html = mount("employees", &employee_list(&[ana()]));
        assert!(html.starts_with("<div id=\"employees\">\n<table>"));
        assert!(html.ends_with("</table>\n</div>"));
    }

    #[test]
    fn test_document_hosts_container() {
        let html = document("react", &employee_list(&[]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<div id=\"react\">").count(), 1);
        assert!(html.contains(HEADER));
    }
}
