use simsearch::{Grid, GridView, SimSearchError};

#[test]
fn grid_view_rejects_invalid_dimensions() {
    let data = [0.0f64; 4];

    let err = GridView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(err, SimSearchError::InvalidDimensions { rows: 0, cols: 1 });

    let err = GridView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(err, SimSearchError::InvalidDimensions { rows: 1, cols: 0 });
}

#[test]
fn grid_view_rejects_invalid_stride() {
    let data = [0.0f64; 8];

    let err = GridView::new(&data, 1, 4, 3).err().unwrap();
    assert_eq!(err, SimSearchError::InvalidStride { cols: 4, stride: 3 });
}

#[test]
fn grid_view_rejects_small_buffer() {
    let data = [0.0f64; 3];

    let err = GridView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, SimSearchError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn grid_rejects_empty_and_jagged_rows() {
    let empty: [Vec<f64>; 0] = [];
    let err = Grid::from_rows(&empty).unwrap_err();
    assert_eq!(err, SimSearchError::InvalidDimensions { rows: 0, cols: 0 });

    let err = Grid::from_rows(&[Vec::<f64>::new(), Vec::new()]).unwrap_err();
    assert_eq!(err, SimSearchError::InvalidDimensions { rows: 2, cols: 0 });

    let err = Grid::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        SimSearchError::JaggedRows {
            row: 1,
            expected: 2,
            got: 1,
        }
    );
    assert!(err.is_invalid_argument());
}

#[test]
fn grid_rejects_non_finite_values() {
    let err = Grid::from_rows(&[[1.0, 2.0], [f64::INFINITY, 4.0]]).unwrap_err();
    assert_eq!(err, SimSearchError::NonFiniteValue { row: 1, col: 0 });

    let err = Grid::filled(2, 3, f64::NAN).unwrap_err();
    assert_eq!(err, SimSearchError::NonFiniteValue { row: 0, col: 0 });
}

#[test]
fn grid_view_window_matches_expected_values() {
    let data: Vec<f64> = (0..16).map(|v| v as f64).collect();
    let grid = Grid::new(data.clone(), 4, 4).unwrap();
    let view = grid.view();
    assert_eq!(view.stride(), 4);
    assert_eq!(view.as_slice(), data.as_slice());

    let window = view.window(1, 1, 2, 2).unwrap();
    assert_eq!(window.rows(), 2);
    assert_eq!(window.cols(), 2);
    assert_eq!(window.stride(), 4);
    assert_eq!(window.row(0).unwrap(), &[5.0, 6.0]);
    assert_eq!(window.row(1).unwrap(), &[9.0, 10.0]);
    assert_eq!(window.get(0, 0), Some(5.0));
    assert!(window.get(0, 2).is_none());

    let err = view.window(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        SimSearchError::WindowOutOfBounds {
            row: 3,
            col: 3,
            rows: 2,
            cols: 2,
            grid_rows: 4,
            grid_cols: 4,
        }
    );
}

#[test]
fn window_of_window_keeps_parent_stride() {
    let data: Vec<f64> = (0..30).map(|v| v as f64).collect();
    let grid = Grid::new(data, 5, 6).unwrap();
    let outer = grid.view().window(1, 1, 4, 4).unwrap();
    let inner = outer.window(2, 1, 2, 3).unwrap();
    assert_eq!(
        inner.to_grid().to_rows(),
        vec![vec![20.0, 21.0, 22.0], vec![26.0, 27.0, 28.0]]
    );
}
