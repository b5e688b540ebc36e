use crate::graph::*;
use std::marker::PhantomData;

/// Renders a graph as an indented list of nodes, each followed by its outgoing edges.
///
/// ```text
/// 1
///   --> 3
///   --"x"-> 4
/// ```
///
/// Undirected edges are drawn as `---` and show up under both endpoints.
pub struct GraphDebug<'a, N, G> {
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
    label: Option<fn(&G, &N, &N) -> Option<String>>,
    _node: PhantomData<fn(&N)>,
}

impl<'a, N, G> GraphDebug<'a, N, G>
where
    N: Node,
    G: BaseGraph<N>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
            label: None,
            _node: PhantomData,
        }
    }

    /// Like [GraphDebug::new], also rendering the value on each edge.
    pub fn with_values(graph: &'a G) -> Self
    where
        G: ValueGraph<N>,
        G::Value: std::fmt::Debug,
    {
        Self {
            label: Some(|g: &G, u: &N, v: &N| g.edge_value(u, v).map(|x| format!("{:?}", x))),
            ..Self::new(graph)
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, N, G> std::fmt::Debug for GraphDebug<'a, N, G>
where
    N: Node,
    G: BaseGraph<N>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let head = if self.graph.is_directed() { '>' } else { '-' };
        for u in self.graph.nodes() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", u)?;
            let Ok(succs) = self.graph.successors(u) else {
                continue;
            };
            for v in succs {
                self.display_indent(f, 1)?;
                match self.label.and_then(|label| label(self.graph, u, v)) {
                    Some(value) => writeln!(f, "--{}{} {:?}", value, head, v)?,
                    None => writeln!(f, "--{} {:?}", head, v)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn renders_directed_edges() {
        let mut g = GraphBuilder::directed().build();
        g.put_edge(1, 2).unwrap();
        g.put_edge(1, 3).unwrap();
        let text = format!("{:?}", GraphDebug::new(&g));
        assert_eq!(text, "1\n  --> 2\n  --> 3\n2\n3\n");
    }

    #[test]
    fn renders_values_and_indentation() {
        let mut g = ValueGraphBuilder::undirected().build();
        g.put_edge_value('a', 'b', 7).unwrap();
        let text = format!("{:?}", GraphDebug::with_values(&g).indent(1, 3));
        assert_eq!(text, " 'a'\n    --7- 'b'\n 'b'\n    --7- 'a'\n");
    }
}
