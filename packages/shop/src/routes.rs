//! Route tree for the storefront.
//!
//! Routes are declared as [`RouteSpec`] values (in code or JSON), then compiled
//! once into an immutable [`RouteTable`]. Compilation rejects unknown roles,
//! malformed patterns, duplicates and redirects that go nowhere, so a table
//! that exists is a table the guard can trust.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::RouteTableError;
use crate::role::Role;

pub const LOGIN_PATH: &str = "/login";

/// Upper bound on chained redirects followed during one navigation.
pub const MAX_REDIRECTS: usize = 8;

/// Page rendered for a matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Login,
    Register,
    Logout,
    NotFound,

    AdminDashboard,
    Categories,
    CreateCategory,
    DetailCategory,
    EditCategory,
    DeleteCategory,
    Products,
    CreateProduct,
    DetailProduct,
    EditProduct,
    DeleteProduct,
    Orders,
    DetailOrder,
    Users,
    Finance,
    Analytics,

    CustomerHome,
    Shop,
    ShopProduct,
    Cart,
    Checkout,
    MyOrders,
    MyOrder,
    Profile,
}

/// Metadata as written in a route declaration. `role` stays a string here so
/// that typos are caught by [`RouteTable::build`] rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSpec {
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub role: Option<String>,
}

impl MetaSpec {
    pub fn protected(role: &str) -> Self {
        Self {
            requires_auth: true,
            role: Some(role.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub path: String,
    #[serde(default)]
    pub view: Option<View>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: MetaSpec,
    #[serde(default)]
    pub children: Vec<RouteSpec>,
}

impl RouteSpec {
    pub fn view(path: &str, view: View) -> Self {
        Self {
            path: path.to_string(),
            view: Some(view),
            redirect: None,
            meta: MetaSpec::default(),
            children: Vec::new(),
        }
    }

    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            path: path.to_string(),
            view: None,
            redirect: Some(to.to_string()),
            meta: MetaSpec::default(),
            children: Vec::new(),
        }
    }

    pub fn layout(path: &str, meta: MetaSpec, children: Vec<RouteSpec>) -> Self {
        Self {
            path: path.to_string(),
            view: None,
            redirect: None,
            meta,
            children,
        }
    }

    pub fn with_meta(mut self, meta: MetaSpec) -> Self {
        self.meta = meta;
        self
    }
}

/// Validated per-record metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    View(View),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

impl Segment {
    fn rank(&self) -> u8 {
        match self {
            Segment::Static(_) => 0,
            Segment::Param(_) => 1,
            Segment::CatchAll(_) => 2,
        }
    }
}

#[derive(Debug, Clone)]
struct RouteNode {
    pattern: String,
    segments: Vec<Segment>,
    target: Option<Target>,
    meta: RouteMeta,
    children: Vec<RouteNode>,
}

/// Outcome of matching a concrete path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub path: String,
    pub pattern: String,
    pub target: Target,
    pub params: BTreeMap<String, String>,
    /// Metadata of every matched record, root first.
    pub chain: Vec<RouteMeta>,
}

impl ResolvedRoute {
    /// True when any matched record asks for authentication.
    pub fn requires_auth(&self) -> bool {
        self.chain.iter().any(|m| m.requires_auth)
    }

    /// The deepest role requirement along the match.
    pub fn required_role(&self) -> Option<Role> {
        self.chain.iter().rev().find_map(|m| m.role)
    }

    pub fn view(&self) -> Option<View> {
        match self.target {
            Target::View(v) => Some(v),
            Target::Redirect(_) => None,
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Numeric `:id` parameter, when present and well formed.
    pub fn id(&self) -> Option<u64> {
        self.param("id")?.parse().ok()
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
}

impl RouteTable {
    pub fn build(specs: &[RouteSpec]) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        let mut roots = specs
            .iter()
            .map(|spec| compile(spec, "", false, &mut seen))
            .collect::<Result<Vec<_>, _>>()?;
        sort_by_specificity(&mut roots);

        let table = Self { roots };
        table.check_redirects()?;
        tracing::debug!("routes.build: {} routes", seen.len());
        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self, RouteTableError> {
        let specs: Vec<RouteSpec> =
            serde_json::from_str(json).map_err(|e| RouteTableError::Parse(e.to_string()))?;
        Self::build(&specs)
    }

    /// The application's route table.
    pub fn storefront() -> Result<Self, RouteTableError> {
        Self::build(&storefront_specs())
    }

    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let clean = path.split(['?', '#']).next().unwrap_or("");
        let parts: Vec<&str> = clean.split('/').filter(|p| !p.is_empty()).collect();

        let mut chain = Vec::new();
        let mut params = BTreeMap::new();
        for root in &self.roots {
            if let Some(leaf) = match_node(root, &parts, &mut params, &mut chain) {
                return Some(ResolvedRoute {
                    path: clean.to_string(),
                    pattern: leaf.pattern.clone(),
                    target: leaf.target.clone()?,
                    params,
                    chain: chain.iter().map(|n: &&RouteNode| n.meta).collect(),
                });
            }
        }
        None
    }

    /// Every declared pattern with its target, in match order.
    pub fn patterns(&self) -> Vec<(String, Target)> {
        fn walk(nodes: &[RouteNode], out: &mut Vec<(String, Target)>) {
            for n in nodes {
                if let Some(t) = &n.target {
                    out.push((n.pattern.clone(), t.clone()));
                }
                walk(&n.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.roots, &mut out);
        out
    }

    fn check_redirects(&self) -> Result<(), RouteTableError> {
        for (pattern, target) in self.patterns() {
            let Target::Redirect(first) = target else {
                continue;
            };
            let mut visited = vec![pattern.clone()];
            let mut to = first;
            loop {
                let resolved = self
                    .resolve(&to)
                    .filter(|r| !r.pattern.contains(":.."))
                    .ok_or_else(|| RouteTableError::DanglingRedirect {
                        path: pattern.clone(),
                        target: to.clone(),
                    })?;
                if visited.contains(&resolved.pattern) || visited.len() > MAX_REDIRECTS {
                    return Err(RouteTableError::RedirectLoop { path: pattern });
                }
                match resolved.target {
                    Target::View(_) => break,
                    Target::Redirect(next) => {
                        visited.push(resolved.pattern);
                        to = next;
                    }
                }
            }
        }
        Ok(())
    }
}

fn compile(
    spec: &RouteSpec,
    parent: &str,
    parent_has_catch_all: bool,
    seen: &mut HashSet<String>,
) -> Result<RouteNode, RouteTableError> {
    let pattern = join(parent, &spec.path);
    let segments = parse_segments(&pattern, &spec.path)?;

    let has_catch_all = parent_has_catch_all
        || segments.iter().any(|s| matches!(s, Segment::CatchAll(_)));
    if has_catch_all && (!spec.children.is_empty() || parent_has_catch_all) {
        return Err(RouteTableError::BadSegment {
            path: pattern,
            segment: spec.path.clone(),
        });
    }

    let role = match &spec.meta.role {
        Some(raw) => Some(
            raw.parse::<Role>()
                .map_err(|_| RouteTableError::UnknownRole {
                    path: pattern.clone(),
                    role: raw.clone(),
                })?,
        ),
        None => None,
    };

    let target = match (&spec.view, &spec.redirect) {
        (Some(_), Some(_)) => return Err(RouteTableError::ViewAndRedirect { path: pattern }),
        (Some(v), None) => Some(Target::View(*v)),
        (None, Some(to)) => Some(Target::Redirect(to.clone())),
        (None, None) if spec.children.is_empty() => {
            return Err(RouteTableError::EmptyRoute { path: pattern })
        }
        (None, None) => None,
    };

    if target.is_some() && !seen.insert(shape_of(&pattern)) {
        return Err(RouteTableError::DuplicatePath { path: pattern });
    }

    let mut children = spec
        .children
        .iter()
        .map(|child| compile(child, &pattern, has_catch_all, seen))
        .collect::<Result<Vec<_>, _>>()?;
    sort_by_specificity(&mut children);

    Ok(RouteNode {
        pattern,
        segments,
        target,
        meta: RouteMeta {
            requires_auth: spec.meta.requires_auth,
            role,
        },
        children,
    })
}

fn join(parent: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    let parent = parent.trim_end_matches('/');
    if path.is_empty() {
        if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        }
    } else {
        format!("{parent}/{path}")
    }
}

/// Normalised shape used for duplicate detection: `/a/:id` and `/a/:slug`
/// collide.
fn shape_of(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|s| {
            if s.starts_with(":..") {
                "*"
            } else if s.starts_with(':') {
                ":"
            } else {
                s
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn parse_segments(pattern: &str, path: &str) -> Result<Vec<Segment>, RouteTableError> {
    let raw: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let bad = |segment: &str| RouteTableError::BadSegment {
        path: pattern.to_string(),
        segment: segment.to_string(),
    };

    let mut out = Vec::with_capacity(raw.len());
    for (i, seg) in raw.iter().copied().enumerate() {
        let parsed = if let Some(name) = seg.strip_prefix(":..") {
            if i + 1 != raw.len() {
                return Err(bad(seg));
            }
            Segment::CatchAll(name.to_string())
        } else if let Some(name) = seg.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else {
            Segment::Static(seg.to_string())
        };

        if let Segment::Param(name) | Segment::CatchAll(name) = &parsed {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(bad(seg));
            }
        }
        out.push(parsed);
    }
    Ok(out)
}

fn sort_by_specificity(nodes: &mut [RouteNode]) {
    nodes.sort_by_key(|n| n.segments.iter().map(Segment::rank).collect::<Vec<u8>>());
}

fn match_node<'a>(
    node: &'a RouteNode,
    parts: &[&str],
    params: &mut BTreeMap<String, String>,
    chain: &mut Vec<&'a RouteNode>,
) -> Option<&'a RouteNode> {
    let snapshot = params.clone();
    let mut rest = parts;
    for seg in &node.segments {
        match seg {
            Segment::Static(s) => match rest.split_first() {
                Some((head, tail)) if *head == s.as_str() => rest = tail,
                _ => {
                    *params = snapshot;
                    return None;
                }
            },
            Segment::Param(name) => match rest.split_first() {
                Some((head, tail)) => {
                    params.insert(name.clone(), (*head).to_string());
                    rest = tail;
                }
                None => {
                    *params = snapshot;
                    return None;
                }
            },
            Segment::CatchAll(name) => {
                params.insert(name.clone(), rest.join("/"));
                rest = &[];
            }
        }
    }

    chain.push(node);
    for child in &node.children {
        if let Some(leaf) = match_node(child, rest, params, chain) {
            return Some(leaf);
        }
    }
    if rest.is_empty() && node.target.is_some() {
        return Some(node);
    }
    chain.pop();
    *params = snapshot;
    None
}

/// Route declarations for the public, admin and customer sections.
pub fn storefront_specs() -> Vec<RouteSpec> {
    vec![
        RouteSpec::redirect("/", LOGIN_PATH),
        RouteSpec::view("/login", View::Login),
        RouteSpec::view("/register", View::Register),
        RouteSpec::view("/logout", View::Logout),
        RouteSpec::layout(
            "/admin",
            MetaSpec::protected("admin"),
            vec![
                RouteSpec::view("", View::AdminDashboard),
                RouteSpec::view("categories", View::Categories),
                RouteSpec::view("categories/new", View::CreateCategory),
                RouteSpec::view("categories/:id", View::DetailCategory),
                RouteSpec::view("categories/:id/edit", View::EditCategory),
                RouteSpec::view("categories/:id/delete", View::DeleteCategory),
                RouteSpec::view("products", View::Products),
                RouteSpec::view("products/new", View::CreateProduct),
                RouteSpec::view("products/:id", View::DetailProduct),
                RouteSpec::view("products/:id/edit", View::EditProduct),
                RouteSpec::view("products/:id/delete", View::DeleteProduct),
                RouteSpec::view("orders", View::Orders),
                RouteSpec::view("orders/:id", View::DetailOrder),
                RouteSpec::view("users", View::Users),
                RouteSpec::view("finance", View::Finance),
                RouteSpec::view("analytics", View::Analytics),
            ],
        ),
        RouteSpec::layout(
            "/customer",
            MetaSpec::protected("customer"),
            vec![
                RouteSpec::view("", View::CustomerHome),
                RouteSpec::view("products", View::Shop),
                RouteSpec::view("products/:id", View::ShopProduct),
                RouteSpec::view("cart", View::Cart),
                RouteSpec::view("checkout", View::Checkout),
                RouteSpec::view("orders", View::MyOrders),
                RouteSpec::view("orders/:id", View::MyOrder),
                RouteSpec::view("profile", View::Profile),
            ],
        ),
        RouteSpec::view("/:..segments", View::NotFound),
    ]
}
