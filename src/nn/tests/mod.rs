mod class_wise_pool;
