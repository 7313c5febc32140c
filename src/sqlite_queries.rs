// substr with a negative start takes the tail; `=` keeps the match case-sensitive
pub const SELECT_TOP_ARTICLES: &str = r#"
                SELECT art.title AS title, COUNT(*) AS views
                FROM articles AS art
                JOIN log AS l ON substr(l.path, -(length(art.slug) + 9)) = '/article/' || art.slug
                GROUP BY art.title
                ORDER BY views DESC, art.title ASC
                LIMIT 3
                "#;
pub const SELECT_TOP_AUTHORS: &str = r#"
                SELECT auth.name AS name, COUNT(*) AS views
                FROM articles AS art
                JOIN authors AS auth ON auth.id = art.author
                JOIN log AS l ON substr(l.path, -(length(art.slug) + 9)) = '/article/' || art.slug
                GROUP BY auth.name
                ORDER BY views DESC, auth.name ASC
                "#;
// Only the leading YYYY-MM-DD is read, so `2016-07-01 07:00:47+00` dumps work too.
pub const SELECT_ERROR_DAYS: &str = r#"
                SELECT date(substr(l.time, 1, 10)) AS day,
                ROUND(SUM(CASE WHEN l.status = '404 NOT FOUND' THEN 1 ELSE 0 END) * 100.0
                    / COUNT(l.status), 2) AS error_percent
                FROM log AS l
                WHERE date(substr(l.time, 1, 10)) BETWEEN '2016-07-01' AND '2016-07-31'
                GROUP BY date(substr(l.time, 1, 10))
                HAVING ROUND(SUM(CASE WHEN l.status = '404 NOT FOUND' THEN 1 ELSE 0 END) * 100.0
                    / COUNT(l.status), 2) > 1.0
                ORDER BY day ASC
                "#;
