// A view is a log path ending in `/article/<slug>`, compared literally.
pub const SELECT_TOP_ARTICLES: &str = r#"
                SELECT art.title AS title, COUNT(*) AS views
                FROM articles AS art
                JOIN log AS l ON right(l.path, length(art.slug) + 9) = '/article/' || art.slug
                GROUP BY art.title
                ORDER BY views DESC, art.title ASC
                LIMIT 3
                "#;
pub const SELECT_TOP_AUTHORS: &str = r#"
                SELECT auth.name AS name, COUNT(*) AS views
                FROM articles AS art
                JOIN authors AS auth ON auth.id = art.author
                JOIN log AS l ON right(l.path, length(art.slug) + 9) = '/article/' || art.slug
                GROUP BY auth.name
                ORDER BY views DESC, auth.name ASC
                "#;
pub const SELECT_ERROR_DAYS: &str = r#"
                SELECT l.time::date AS day,
                CAST(ROUND(COUNT(l.status) FILTER (WHERE l.status = '404 NOT FOUND') * 100::numeric
                    / COUNT(l.status)::numeric, 2) AS float8) AS error_percent
                FROM log AS l
                WHERE l.time::date BETWEEN DATE '2016-07-01' AND DATE '2016-07-31'
                GROUP BY l.time::date
                HAVING ROUND(COUNT(l.status) FILTER (WHERE l.status = '404 NOT FOUND') * 100::numeric
                    / COUNT(l.status)::numeric, 2) > 1.0
                ORDER BY day ASC
                "#;
