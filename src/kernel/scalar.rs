//! Scalar reference sweep.

use crate::grid::{Grid, GridView};
use crate::kernel::{Kernel, UNDEFINED_SCORE};
use crate::pattern::PatternPlan;
use crate::util::SimSearchResult;

/// Sequential sweep over offsets in row-major order.
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    fn sweep(image: GridView<'_>, plan: &PatternPlan) -> SimSearchResult<Grid> {
        let (out_rows, out_cols) = plan.output_dims(image)?;
        let mut data = Vec::with_capacity(out_rows * out_cols);
        for row in 0..out_rows {
            for col in 0..out_cols {
                let window = image.window(row, col, plan.rows(), plan.cols())?;
                data.push(plan.correlate(window).unwrap_or(UNDEFINED_SCORE));
            }
        }
        Ok(Grid::from_parts(data, out_rows, out_cols))
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKernel;
    use crate::grid::Grid;
    use crate::kernel::Kernel;
    use crate::pattern::PatternPlan;

    #[test]
    fn sweep_matches_bruteforce() {
        let img_rows = 5;
        let img_cols = 6;
        let image: Vec<f64> = (0..img_rows * img_cols)
            .map(|i| ((i * 17 + (i / img_cols) * 9) % 31) as f64)
            .collect();
        let image = Grid::new(image, img_rows, img_cols).unwrap();
        let pattern = Grid::from_rows(&[[3.0, 1.0, 4.0], [1.0, 5.0, 9.0]]).unwrap();
        let plan = PatternPlan::from_view(pattern.view());

        let out = ScalarKernel::sweep(image.view(), &plan).unwrap();
        assert_eq!((out.rows(), out.cols()), (4, 4));

        for row in 0..out.rows() {
            for col in 0..out.cols() {
                let mut img_sum = 0.0;
                for i in 0..2 {
                    for j in 0..3 {
                        img_sum += image.get(row + i, col + j).unwrap();
                    }
                }
                let img_mean = img_sum / 6.0;
                let tpl_mean = 23.0 / 6.0;
                let (mut cross, mut isq, mut psq) = (0.0, 0.0, 0.0);
                for i in 0..2 {
                    for j in 0..3 {
                        let di = image.get(row + i, col + j).unwrap() - img_mean;
                        let dp = pattern.get(i, j).unwrap() - tpl_mean;
                        cross += di * dp;
                        isq += di * di;
                        psq += dp * dp;
                    }
                }
                let expected = if isq * psq == 0.0 {
                    -1.0
                } else {
                    cross / (isq * psq).sqrt()
                };
                let got = out.get(row, col).unwrap();
                assert!((got - expected).abs() < 1e-9, "({row}, {col}): {got} vs {expected}");
            }
        }
    }
}
