pub mod metric_collector;
