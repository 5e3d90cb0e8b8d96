use crate::expression::Expression;

/// Kernel density estimate at the current heatmap pixel. Only meaningful in
/// `heatmap-color`.
pub fn heatmap_density() -> Expression {
    Expression::nullary("heatmap-density")
}
