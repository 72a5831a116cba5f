//! Nitro server API route generation
//!
//! Five fixed handlers per model under `server/api/<slug>/`. Each goes
//! through the shared `prisma` accessor; `id` route params are coerced
//! with `Number(...)` before lookup.

use super::fileset::GeneratedFileSet;
use crate::model::ModelSpec;

/// Build the five CRUD route files for one model
pub fn file_set(spec: &ModelSpec) -> GeneratedFileSet {
    let slug = &spec.table_slug;
    let mut set = GeneratedFileSet::new();

    set.add(
        format!("server/api/{}/index.get.ts", slug),
        format!(
            r#"import {{ prisma }} from '@/server/prisma'

export default defineEventHandler(async () => {{
  return await prisma.{slug}.findMany()
}})
"#
        ),
    );

    set.add(
        format!("server/api/{}/create.post.ts", slug),
        format!(
            r#"import {{ prisma }} from '@/server/prisma'

export default defineEventHandler(async (event) => {{
  const body = await readBody(event)
  return await prisma.{slug}.create({{ data: body }})
}})
"#
        ),
    );

    set.add(
        format!("server/api/{}/[id].get.ts", slug),
        format!(
            r#"import {{ prisma }} from '@/server/prisma'

export default defineEventHandler(async (event) => {{
  const id = Number(getRouterParam(event, 'id'))
  return await prisma.{slug}.findUnique({{ where: {{ id }} }})
}})
"#
        ),
    );

    set.add(
        format!("server/api/{}/[id].put.ts", slug),
        format!(
            r#"import {{ prisma }} from '@/server/prisma'

export default defineEventHandler(async (event) => {{
  const id = Number(getRouterParam(event, 'id'))
  const body = await readBody(event)
  return await prisma.{slug}.update({{ where: {{ id }}, data: body }})
}})
"#
        ),
    );

    set.add(
        format!("server/api/{}/[id].delete.ts", slug),
        format!(
            r#"import {{ prisma }} from '@/server/prisma'

export default defineEventHandler(async (event) => {{
  const id = Number(getRouterParam(event, 'id'))
  return await prisma.{slug}.delete({{ where: {{ id }} }})
}})
"#
        ),
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelSpec;
    use std::path::PathBuf;

    fn post_spec() -> ModelSpec {
        ModelSpec::new("post", &["title:string".to_string()]).unwrap()
    }

    #[test]
    fn test_exactly_five_route_files() {
        let set = file_set(&post_spec());
        let paths: Vec<_> = set.paths().cloned().collect();
        let expected: Vec<PathBuf> = [
            "server/api/posts/index.get.ts",
            "server/api/posts/create.post.ts",
            "server/api/posts/[id].get.ts",
            "server/api/posts/[id].put.ts",
            "server/api/posts/[id].delete.ts",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_handlers_use_slug_accessor() {
        let set = file_set(&post_spec());
        let list = set.content("server/api/posts/index.get.ts").unwrap();
        assert!(list.contains("prisma.posts.findMany()"));

        let create = set.content("server/api/posts/create.post.ts").unwrap();
        assert!(create.contains("readBody(event)"));
        assert!(create.contains("prisma.posts.create({ data: body })"));
    }

    #[test]
    fn test_id_params_are_numeric() {
        let set = file_set(&post_spec());
        for file in ["[id].get.ts", "[id].put.ts", "[id].delete.ts"] {
            let content = set
                .content(format!("server/api/posts/{}", file))
                .unwrap();
            assert!(
                content.contains("const id = Number(getRouterParam(event, 'id'))"),
                "{} must coerce id",
                file
            );
            assert!(content.contains("where: { id }"));
        }
    }
}
